use serde::Deserialize;

#[derive(Deserialize)]
/// Target of the "Give Premium Access" action.
pub struct UpgradeUserForm {
    pub user_id: i32,
}
