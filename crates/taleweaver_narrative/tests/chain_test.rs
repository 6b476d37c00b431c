//! Story and image-prompt chains against a recording mock backend.

mod test_utils;

use taleweaver_core::{Delimiter, Role};
use taleweaver_error::{BackendErrorKind, TaleweaverErrorKind};
use taleweaver_narrative::{
    Bindings, Chain, GenerationOptions, ImagePromptChain, PromptTemplate, continue_story_chain,
    start_story_chain,
};
use test_utils::MockTextGenerator;

#[tokio::test]
async fn test_start_story_wraps_theme_in_delimiter() {
    let mock = MockTextGenerator::new_success("You wake in a cold crypt.");
    let chain = start_story_chain(mock.clone(), &Delimiter::default()).unwrap();

    let text = chain.invoke("Horror").await.unwrap();
    assert_eq!(text, "You wake in a cold crypt.");

    let request = mock.last_request();
    assert_eq!(request.messages().len(), 1);
    assert!(request.messages()[0].content.contains("```Horror```"));
}

#[tokio::test]
async fn test_start_story_honors_custom_delimiter() {
    let mock = MockTextGenerator::new_success("...");
    let chain = start_story_chain(mock.clone(), &Delimiter::new("###")).unwrap();

    chain.invoke("Romance").await.unwrap();

    let request = mock.last_request();
    let content = &request.messages()[0].content;
    assert!(content.contains("###Romance###"));
    assert!(!content.contains("```"));
}

#[tokio::test]
async fn test_continue_story_sends_three_ordered_messages() {
    let mock = MockTextGenerator::new_success("The torch flares to life.");
    let chain = continue_story_chain(
        mock.clone(),
        "You stand in a dark cave.",
        &Delimiter::default(),
    )
    .unwrap();

    let text = chain.invoke("I light a torch.").await.unwrap();
    assert_eq!(text, "The torch flares to life.");

    let request = mock.last_request();
    let messages = request.messages();
    assert_eq!(messages.len(), 3);

    assert_eq!(messages[0].role, Role::System);
    assert!(
        messages[0]
            .content
            .contains("```You stand in a dark cave.```")
    );

    assert_eq!(messages[1].role, Role::Human);
    assert_eq!(messages[1].content, "I light a torch.");

    assert_eq!(messages[2].role, Role::System);
    assert!(!messages[2].content.is_empty());
    assert!(!messages[2].content.contains("I light a torch."));
}

#[tokio::test]
async fn test_user_input_with_braces_is_passed_verbatim() {
    let mock = MockTextGenerator::new_success("ok");
    let chain = continue_story_chain(mock.clone(), "story", &Delimiter::default()).unwrap();

    chain.invoke("I shout {help} }{").await.unwrap();

    assert_eq!(
        mock.last_request().messages()[1].content,
        "I shout {help} }{"
    );
}

#[tokio::test]
async fn test_empty_inputs_are_accepted() {
    let mock = MockTextGenerator::new_success("ok");
    let chain = continue_story_chain(mock.clone(), "", &Delimiter::default()).unwrap();

    chain.invoke("").await.unwrap();

    let request = mock.last_request();
    assert!(request.messages()[0].content.ends_with("``````"));
    assert_eq!(request.messages()[1].content, "");
}

#[tokio::test]
async fn test_missing_binding_fails_before_backend_call() {
    let mock = MockTextGenerator::new_success("never");
    let template = PromptTemplate::single("{a} then {b}").unwrap();
    let chain = Chain::new("pair", template, mock.clone(), "a");

    let err = chain.invoke("first").await.unwrap_err();

    assert!(err.is_missing_binding());
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_invoke_with_fills_every_open_placeholder() {
    let mock = MockTextGenerator::new_success("done");
    let template = PromptTemplate::single("{a} then {b}").unwrap();
    let chain = Chain::new("pair", template, mock.clone(), "a");

    chain
        .invoke_with(&Bindings::from([("a", "one"), ("b", "two")]))
        .await
        .unwrap();

    assert_eq!(mock.last_request().messages()[0].content, "one then two");
}

#[tokio::test]
async fn test_backend_failure_propagates() {
    let mock = MockTextGenerator::new_error(BackendErrorKind::Api {
        status: 500,
        message: "server exploded".into(),
    });
    let chain = start_story_chain(mock, &Delimiter::default()).unwrap();

    let err = chain.invoke("Drama").await.unwrap_err();
    assert!(err.is_backend());
    match err.kind() {
        TaleweaverErrorKind::Backend(backend) => {
            assert!(matches!(backend.kind, BackendErrorKind::Api { status: 500, .. }))
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_options_reach_the_request() {
    let mock = MockTextGenerator::new_success("ok");
    let options = GenerationOptions::builder()
        .temperature(0.9f32)
        .max_tokens(256u32)
        .build()
        .unwrap();
    let chain = start_story_chain(mock.clone(), &Delimiter::default())
        .unwrap()
        .with_options(options);

    chain.invoke("Fantasy").await.unwrap();

    let request = mock.last_request();
    assert_eq!(*request.temperature(), Some(0.9));
    assert_eq!(*request.max_tokens(), Some(256));
    assert!(request.model().is_none());
}

#[test]
fn test_invoke_blocking_matches_async_result() {
    let mock = MockTextGenerator::new_success("A calm sea.");
    let chain = start_story_chain(mock.clone(), &Delimiter::default()).unwrap();

    let text = chain.invoke_blocking("Novel").unwrap();

    assert_eq!(text, "A calm sea.");
    assert_eq!(mock.call_count(), 1);
    assert!(mock.last_request().messages()[0].content.contains("```Novel```"));
}

#[tokio::test]
async fn test_invoke_blocking_inside_runtime_is_an_error() {
    let mock = MockTextGenerator::new_success("unused");
    let chain = start_story_chain(mock.clone(), &Delimiter::default()).unwrap();

    let err = chain.invoke_blocking("Novel").unwrap_err();

    assert!(matches!(
        err.kind(),
        TaleweaverErrorKind::Backend(e) if matches!(e.kind, BackendErrorKind::Runtime(_))
    ));
    assert_eq!(mock.call_count(), 0);
}

#[test]
fn test_render_previews_without_calling_backend() {
    let mock = MockTextGenerator::new_success("unused");
    let chain = continue_story_chain(mock.clone(), "ctx", &Delimiter::default()).unwrap();

    let messages = chain.render("I wave.").unwrap();

    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].content, "I wave.");
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_image_prompt_chain_wraps_input_and_cleans_output() {
    let mock = MockTextGenerator::new_success("  Prompt: \"A torchlit cave, hyper realistic\"\n");
    let chain = ImagePromptChain::new(mock.clone(), &Delimiter::default()).unwrap();

    let prompt = chain.invoke("The torch flares to life.").await.unwrap();

    assert_eq!(prompt, "A torchlit cave, hyper realistic");
    let request = mock.last_request();
    let content = &request.messages()[0].content;
    assert!(content.contains("```The torch flares to life.```"));
}
