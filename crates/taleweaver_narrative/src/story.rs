//! Start-story and continue-story chains.

use crate::prompts::{
    CONTINUE_STORY_ACTION, CONTINUE_STORY_CONTEXT, CONTINUE_STORY_GUIDANCE, DELIMITER_KEY,
    STORY_CONTEXT_KEY, START_STORY, THEME_KEY, USER_INPUT_KEY,
};
use crate::{Bindings, Chain, PromptTemplate};
use taleweaver_core::{Delimiter, Role};
use taleweaver_error::TaleweaverResult;
use taleweaver_interface::TextGenerator;

/// Template for opening a story: a single message needing `delimiter` and `theme`.
pub fn start_story_template() -> TaleweaverResult<PromptTemplate> {
    Ok(PromptTemplate::single(START_STORY)?)
}

/// Template for continuing a story.
///
/// Renders three messages in order: system context, the reader's action as a
/// human message, then system guidance.
pub fn continue_story_template() -> TaleweaverResult<PromptTemplate> {
    Ok(PromptTemplate::from_messages([
        (Role::System, CONTINUE_STORY_CONTEXT),
        (Role::Human, CONTINUE_STORY_ACTION),
        (Role::System, CONTINUE_STORY_GUIDANCE),
    ])?)
}

/// Chain that opens a story; `invoke` takes the theme.
///
/// # Examples
///
/// ```rust,ignore
/// let chain = start_story_chain(client, &Delimiter::default())?;
/// let intro = chain.invoke("Fantasy").await?;
/// ```
pub fn start_story_chain<G: TextGenerator>(
    generator: G,
    delimiter: &Delimiter,
) -> TaleweaverResult<Chain<G>> {
    Chain::new("start_story", start_story_template()?, generator, THEME_KEY)
        .partial(&Bindings::new().with(DELIMITER_KEY, delimiter.as_str()))
}

/// Chain that continues `story_context`; `invoke` takes the reader's action.
pub fn continue_story_chain<G: TextGenerator>(
    generator: G,
    story_context: &str,
    delimiter: &Delimiter,
) -> TaleweaverResult<Chain<G>> {
    Chain::new(
        "continue_story",
        continue_story_template()?,
        generator,
        USER_INPUT_KEY,
    )
    .partial(
        &Bindings::new()
            .with(DELIMITER_KEY, delimiter.as_str())
            .with(STORY_CONTEXT_KEY, story_context),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_template_inputs() {
        let template = start_story_template().unwrap();
        assert_eq!(template.input_variables(), vec!["delimiter", "theme"]);
        assert_eq!(template.message_count(), 1);
    }

    #[test]
    fn test_continue_template_inputs() {
        let template = continue_story_template().unwrap();
        assert_eq!(
            template.input_variables(),
            vec!["delimiter", "story_context", "user_input"]
        );
        assert_eq!(template.message_count(), 3);
    }

    #[test]
    fn test_chains_bind_the_delimiter_placeholder() {
        let template = start_story_template().unwrap();
        assert!(
            template
                .input_variables()
                .iter()
                .any(|name| name == Delimiter::PLACEHOLDER)
        );

        let bound = template
            .partial(&Bindings::new().with(Delimiter::PLACEHOLDER, "~~~"))
            .unwrap();
        assert_eq!(bound.input_variables(), vec!["theme"]);
    }
}
