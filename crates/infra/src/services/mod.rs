mod telegram;

pub use telegram::{IMessenger, TelegramMessenger};
