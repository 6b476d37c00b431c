//! Instruction texts for the story and image-prompt chains.
//!
//! Each text uses `{delimiter}` to fence caller-supplied content so the model
//! can tell instructions apart from story material.

use taleweaver_core::Delimiter;

/// Placeholder holding the fence marker.
pub const DELIMITER_KEY: &str = Delimiter::PLACEHOLDER;
/// Placeholder holding the chosen theme.
pub const THEME_KEY: &str = "theme";
/// Placeholder holding the story so far.
pub const STORY_CONTEXT_KEY: &str = "story_context";
/// Placeholder holding the player's action.
pub const USER_INPUT_KEY: &str = "user_input";
/// Placeholder holding the text to illustrate.
pub const INPUT_TEXT_KEY: &str = "input_text";

/// Opens a new story from a theme.
pub const START_STORY: &str = "You are a seasoned storyteller and worldbuilder whose \
best-selling books span science fiction, fantasy, mystery, romance, literary fiction, \
thrillers and more. From the theme given below, write the opening of an engaging story. \
Keep the opening short and make it grip the reader from the first line. Paint the setting \
with vivid, concrete visual detail. Most importantly, cast the reader as a character inside \
the story. The theme is enclosed in {delimiter} markers.\n\
Theme: {delimiter}{theme}{delimiter}";

/// Frames the story so far for a continuation.
pub const CONTINUE_STORY_CONTEXT: &str = "You are a seasoned storyteller and worldbuilder \
whose best-selling books span science fiction, fantasy, mystery, romance, literary fiction, \
thrillers and more. Below is the story told so far. Continue it from where it stops, guided \
by the reader's next action. Never decide anything on the reader's behalf. The story is \
enclosed in {delimiter} markers.\n\
Story: {delimiter}{story_context}{delimiter}";

/// The reader's action, passed through untouched.
pub const CONTINUE_STORY_ACTION: &str = "{user_input}";

/// Reminds the model to honor the reader's action.
pub const CONTINUE_STORY_GUIDANCE: &str = "Weave the reader's action into the continuation. \
What the reader does must change the story, and the story must respond to the reader. \
Never decide anything on the reader's behalf.";

/// Turns story text into a prompt for an image model.
pub const IMAGE_PROMPT: &str = "You are an expert prompt engineer writing a prompt for a \
stable diffusion image model. Base the prompt on the input text below and describe its \
content vividly in a realistic style. Be concise and state explicitly that the style is \
realistic or hyper realistic. Output only the prompt itself, with no commentary or narration. \
The input text is enclosed in {delimiter} markers.\n\
Input text: {delimiter}{input_text}{delimiter}";
