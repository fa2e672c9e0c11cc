pub mod binary;
pub mod io;
pub mod traits;

pub use self::binary::{BinaryImage, BACKGROUND, FOREGROUND};
pub use self::traits::{ImageView, Rows};
