mod faq_card;
mod field_error;
mod sidebar;
mod theme_toggle;

pub use faq_card::FaqCard;
pub use field_error::FieldError;
pub use sidebar::Sidebar;
pub use theme_toggle::ThemeToggle;
