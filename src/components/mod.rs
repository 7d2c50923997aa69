//! UI Components
//!
//! Reusable Leptos components.

mod tab_bar;
mod search_box;
mod record_card;
mod delete_confirm_button;
mod snippet_form;
mod bookmark_form;
mod snippet_panel;
mod bookmark_panel;
mod notice_toast;
mod transfer_bar;

pub use tab_bar::TabBar;
pub use search_box::SearchBox;
pub use record_card::{MenuAction, RecordCard};
pub use delete_confirm_button::DeleteConfirmItem;
pub use snippet_form::SnippetForm;
pub use bookmark_form::BookmarkForm;
pub use snippet_panel::SnippetPanel;
pub use bookmark_panel::BookmarkPanel;
pub use notice_toast::NoticeToast;
pub use transfer_bar::TransferBar;
