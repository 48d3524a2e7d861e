pub mod auth_modal;
pub mod button;
pub mod editor_title;
pub mod icons;
pub mod import_title;
pub mod search_button;
pub mod shell;
pub mod styles;
pub mod user_menu;

pub use auth_modal::ModalAuthentication;
pub use button::{Button, ButtonVariant, IconButton};
pub use editor_title::EditorTitle;
pub use import_title::EditorImportTitle;
pub use search_button::SearchButton;
pub use shell::{ToolbarShell, ToolbarTitleShell};
pub use user_menu::UserMenu;
