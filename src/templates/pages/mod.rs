pub mod contact;
pub mod home;
pub mod login;
pub mod patio;
pub mod search;

pub use contact::contact_page;
pub use home::home_page;
pub use login::login_page;
pub use patio::{patio_page, PatioVm};
pub use search::{search_page, SearchOutcome};
