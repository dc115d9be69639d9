//! Earnings listing: search, pagination and premium upgrades.

use crate::SERVICE_ACCESS_ROLE;
use crate::domain::user::AppUser;
use crate::dto::earnings::{EarningsPageData, EarningsQuery};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::{self, DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{UserReader, UserWriter};
use crate::routes::check_role;
use crate::services::{ServiceError, ServiceResult};

/// Loads the searched, paginated user table for the earnings page.
///
/// The requested page is clamped to the filtered result set, so a stale
/// page number after a narrowing search still renders the last page.
pub fn load_earnings_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: EarningsQuery,
) -> ServiceResult<EarningsPageData>
where
    R: UserReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let users = repo.list_users()?;

    let search_query = query
        .q
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let filtered = match &search_query {
        Some(term) => pagination::filter(&users, term),
        None => users,
    };

    let total = filtered.len();
    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);
    let page = pagination::clamp_page(query.page.unwrap_or(1), total_pages);
    let items = pagination::page_slice(&filtered, page, DEFAULT_ITEMS_PER_PAGE);

    Ok(EarningsPageData {
        users: Paginated::new(items, page, total_pages),
        total,
        search_query,
    })
}

/// Returns all users matching the search term, unpaginated.
pub fn search_users<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: &str,
) -> ServiceResult<Vec<AppUser>>
where
    R: UserReader + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let users = repo.list_users()?;
    Ok(pagination::filter(&users, query))
}

/// Grants premium access to the given user.
pub fn upgrade_to_premium<R>(
    repo: &R,
    user: &AuthenticatedUser,
    user_id: i32,
) -> ServiceResult<AppUser>
where
    R: UserWriter + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    repo.set_premium(user_id, true).map_err(|err| {
        log::error!("Failed to upgrade user {user_id}: {err}");
        ServiceError::from(err)
    })
}
