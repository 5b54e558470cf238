//! Search engine implementations.

pub mod yandex;

pub use yandex::{Yandex, YandexMode};
