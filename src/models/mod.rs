pub mod request_parameter;
pub mod pickup_key;
pub mod date_range;
pub mod news;
pub mod notification;

pub use request_parameter::RequestParameter;
pub use pickup_key::PickupKey;
pub use date_range::DateRange;
pub use news::{Article, NewsApiResponse, Source};
pub use notification::NotificationMessage;
