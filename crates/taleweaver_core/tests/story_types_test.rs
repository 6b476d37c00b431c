use taleweaver_core::{
    Delimiter, ImageOutcome, PromptMessage, RenderedImage, Role, StoryInput, StoryResponse,
};

#[test]
fn test_roles_map_to_chat_wire_names() {
    assert_eq!(Role::System.as_wire(), "system");
    assert_eq!(Role::Human.as_wire(), "user");
    assert_eq!(Role::Assistant.as_wire(), "assistant");
    assert_eq!(Role::Human.to_string(), "human");
}

#[test]
fn test_prompt_message_constructors() {
    let system = PromptMessage::system("rules");
    let human = PromptMessage::human("I open the door.");
    assert_eq!(system.role, Role::System);
    assert_eq!(human.role, Role::Human);
    assert_eq!(human.content, "I open the door.");
}

#[test]
fn test_story_records_use_snake_case_json() {
    let input = StoryInput {
        story_context: "A dragon sleeps.".into(),
        user_input: "I tiptoe past.".into(),
    };
    let json = serde_json::to_value(&input).unwrap();
    assert_eq!(json["story_context"], "A dragon sleeps.");
    assert_eq!(json["user_input"], "I tiptoe past.");

    let response = StoryResponse::from("The dragon stirs.".to_string());
    assert_eq!(
        serde_json::to_string(&response).unwrap(),
        r#"{"story_text":"The dragon stirs."}"#
    );
}

#[test]
fn test_image_outcome_accessors() {
    let image = RenderedImage::png(vec![1, 2, 3]);
    let rendered = ImageOutcome::from(Some(image.clone()));

    assert!(!rendered.is_absent());
    assert_eq!(rendered.image().map(RenderedImage::len), Some(3));
    assert_eq!(rendered.into_image(), Some(image));

    let absent = ImageOutcome::from(None);
    assert!(absent.is_absent());
    assert!(absent.image().is_none());
}

#[test]
fn test_absent_outcome_serializes_with_status_tag() {
    let json = serde_json::to_value(ImageOutcome::Absent).unwrap();
    assert_eq!(json["status"], "absent");
}

#[test]
fn test_rendered_image_base64() {
    let image = RenderedImage::png(b"PNG".to_vec());
    assert_eq!(image.to_base64(), "UE5H");
    assert_eq!(image.mime(), "image/png");
}

#[test]
fn test_delimiter_unwrap_requires_both_sides() {
    let fence = Delimiter::default();
    assert_eq!(fence.unwrap_from("```inner```"), "inner");
    assert_eq!(fence.unwrap_from("```inner"), "```inner");
    assert_eq!(Delimiter::new("").unwrap_from("text"), "text");
}
