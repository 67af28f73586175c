pub mod confirm;
pub mod editor;
pub mod help;
pub mod helpers;
pub mod manager;

pub use confirm::ConfirmRemoveModal;
pub use editor::EditorModal;
pub use help::HelpModal;
pub use manager::ModalManager;
