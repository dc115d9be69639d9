use crate::domain::user::AppUser;
use crate::pagination::Paginated;

/// Query parameters accepted by the earnings page service.
#[derive(Debug, Default)]
pub struct EarningsQuery {
    /// Optional search string entered by the user.
    pub q: Option<String>,
    /// Page number requested by the user interface.
    pub page: Option<usize>,
}

/// Data required to render the earnings table.
#[derive(Debug)]
pub struct EarningsPageData {
    /// Page of users to show, with pager tokens.
    pub users: Paginated<AppUser>,
    /// Total number of users matching the filter.
    pub total: usize,
    /// Search query echoed back to the template when present.
    pub search_query: Option<String>,
}
