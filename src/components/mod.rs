pub mod entry_detail;
pub mod entry_list;
pub mod filter_bar;
pub mod footer;
pub mod header;
pub mod modals;
