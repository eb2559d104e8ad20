mod extract;
pub use extract::*;

mod summarizer;
pub use summarizer::*;

mod upload;
pub use upload::*;
