pub mod prompt;
pub mod template;

pub use prompt::{build_prompt, house_name, render_prompt_summary};
pub use template::{aspect_sentence, render_interpretation, sign_qualities};
