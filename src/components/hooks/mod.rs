pub mod use_confirm;
pub mod use_resizer;
