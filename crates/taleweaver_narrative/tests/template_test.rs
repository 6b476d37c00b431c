//! Template rendering and partial binding.

use taleweaver_core::Role;
use taleweaver_error::TemplateErrorKind;
use taleweaver_narrative::{
    Bindings, PromptTemplate, continue_story_template, start_story_template,
};

#[test]
fn test_partial_then_render_matches_single_render() {
    let template = start_story_template().unwrap();

    let staged = template
        .partial(&Bindings::from([("delimiter", "```")]))
        .unwrap()
        .render(&Bindings::from([("theme", "Horror")]))
        .unwrap();

    let reversed = template
        .partial(&Bindings::from([("theme", "Horror")]))
        .unwrap()
        .render(&Bindings::from([("delimiter", "```")]))
        .unwrap();

    let at_once = template
        .render(&Bindings::from([("delimiter", "```"), ("theme", "Horror")]))
        .unwrap();

    assert_eq!(staged, at_once);
    assert_eq!(reversed, at_once);
}

#[test]
fn test_partial_reduces_input_variables() {
    let template = continue_story_template().unwrap();
    let bound = template
        .partial(&Bindings::from([
            ("delimiter", "```"),
            ("story_context", "The ship drifts."),
        ]))
        .unwrap();

    assert_eq!(bound.input_variables(), vec!["user_input"]);
    let mut fixed: Vec<_> = bound.bound_variables().collect();
    fixed.sort();
    assert_eq!(fixed, vec!["delimiter", "story_context"]);
}

#[test]
fn test_missing_binding_is_reported_by_name() {
    let template = PromptTemplate::single("Theme: {delimiter}{theme}{delimiter}").unwrap();
    let err = template
        .render(&Bindings::from([("delimiter", "```")]))
        .unwrap_err();
    assert_eq!(err.kind, TemplateErrorKind::MissingBinding("theme".into()));
}

#[test]
fn test_extra_bindings_are_ignored() {
    let template = PromptTemplate::single("Hello {name}").unwrap();
    let messages = template
        .render(&Bindings::from([("name", "Ada"), ("unused", "whatever")]))
        .unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content, "Hello Ada");
    assert_eq!(messages[0].role, Role::Human);
}

#[test]
fn test_rebinding_a_fixed_name_fails() {
    let template = PromptTemplate::single("{a} and {b}").unwrap();
    let bound = template.partial(&Bindings::from([("a", "1")])).unwrap();
    let err = bound.partial(&Bindings::from([("a", "2")])).unwrap_err();
    assert_eq!(err.kind, TemplateErrorKind::AlreadyBound("a".into()));
}

#[test]
fn test_render_ignores_values_for_fixed_names() {
    let template = PromptTemplate::single("{a} and {b}").unwrap();
    let bound = template.partial(&Bindings::from([("a", "1")])).unwrap();
    let messages = bound
        .render(&Bindings::from([("a", "override"), ("b", "2")]))
        .unwrap();
    assert_eq!(messages[0].content, "1 and 2");
}

#[test]
fn test_bound_values_are_not_rescanned() {
    let template = continue_story_template().unwrap();
    let bound = template
        .partial(&Bindings::from([
            ("delimiter", "```"),
            ("story_context", "A note reads {user_input} and {{braces}}."),
        ]))
        .unwrap();
    assert_eq!(bound.input_variables(), vec!["user_input"]);

    let messages = bound
        .render(&Bindings::from([("user_input", "I read it.")]))
        .unwrap();
    assert!(
        messages[0]
            .content
            .contains("```A note reads {user_input} and {{braces}}.```")
    );
    assert_eq!(messages[1].content, "I read it.");
}

#[test]
fn test_escaped_braces_render_literally() {
    let template = PromptTemplate::single("Return {{\"text\": \"{value}\"}}").unwrap();
    assert_eq!(template.input_variables(), vec!["value"]);
    let messages = template.render(&Bindings::from([("value", "hi")])).unwrap();
    assert_eq!(messages[0].content, "Return {\"text\": \"hi\"}");
}

#[test]
fn test_malformed_templates_are_rejected() {
    assert_eq!(
        PromptTemplate::single("Oops {theme").unwrap_err().kind,
        TemplateErrorKind::UnterminatedPlaceholder(5)
    );
    assert_eq!(
        PromptTemplate::single("Oops } here").unwrap_err().kind,
        TemplateErrorKind::UnmatchedBrace(5)
    );
}

#[test]
fn test_message_order_and_roles_are_preserved() {
    let template = PromptTemplate::from_messages([
        (Role::System, "first {x}"),
        (Role::Human, "second"),
        (Role::Assistant, "third {x}"),
    ])
    .unwrap();
    assert_eq!(template.input_variables(), vec!["x"]);

    let messages = template.render(&Bindings::from([("x", "!")])).unwrap();
    let roles: Vec<_> = messages.iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![Role::System, Role::Human, Role::Assistant]);
    assert_eq!(messages[2].content, "third !");
}
