// App layer: the user-facing screens (landing, location, food ordering) and their translations.

pub mod catalog;
pub mod i18n;
pub mod landing;
pub mod location;
pub mod order;
