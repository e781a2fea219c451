use chatcmd_engine::markup::{to_markdown, unescape_entities};
use chatcmd_engine::{Command, Message, split, split_args};
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Runs the whole pipeline the way a bot would: split, unescape and strip
/// the trigger, assemble the content, convert to Markdown, tokenize.
fn pipeline(body: &str, trigger: Option<&str>) -> Option<(String, String, Vec<String>)> {
    let command = Command::from_message(Message::new(body), trigger)?;
    Some((
        command.command_name().to_string(),
        command.content_markdown(),
        command.content_as_args(),
    ))
}

#[rstest]
#[case("define", "java")]
#[case("/help", "me   please")]
#[case("x", "a\tb")]
fn plain_leading_token_and_trailing_text(#[case] name: &str, #[case] rest: &str) {
    let body = format!("{name} {rest}  ");
    let result = split(&body);
    assert_eq!(result.command_name_raw, name);
    assert_eq!(result.content(&body), Some(format!("{rest}  ").as_str()));

    let command = Command::from_message(Message::new(body.as_str()), None).unwrap();
    assert_eq!(command.content(), rest);

    let fixed = Command::from_message(
        Message::new(body.as_str()).with_fixed_width_font(true),
        None,
    )
    .unwrap();
    assert_eq!(fixed.content(), format!("{rest}  "));
}

#[test]
fn tag_open_across_boundary_prefixes_content() {
    let command =
        Command::from_message(Message::new(r#"<a href="x"><b>/define java</b></a>"#), Some("/"))
            .unwrap();
    assert!(command.content().starts_with(r#"<a href="x"><b>java"#));
}

#[test]
fn tag_closed_within_name_is_not_carried() {
    let command = Command::from_message(Message::new("<b>/define</b> java"), Some("/")).unwrap();
    assert_eq!(command.content(), "java");
}

#[test]
fn formatted_args_end_to_end() {
    let (name, markdown, args) =
        pipeline(r#"/define <b>java</b> "foo bar" 2"#, Some("/")).unwrap();
    assert_eq!(name, "define");
    assert_eq!(markdown, r#"**java** "foo bar" 2"#);
    assert_eq!(args, vec!["**java**", "foo bar", "2"]);
}

#[test]
fn bold_command_with_empty_trigger() {
    let raw = "<b>java</b> arg1";
    let result = split(raw);
    assert_eq!(unescape_entities(&result.command_name_raw), "java");
    assert_eq!(result.content(raw), Some("arg1"));

    let (name, markdown, args) = pipeline(raw, Some("")).unwrap();
    assert_eq!(name, "java");
    assert_eq!(markdown, "arg1");
    assert_eq!(args, vec!["arg1"]);
}

#[test]
fn whole_message_as_content_converts_to_markdown() {
    let (_, markdown, args) = pipeline("/echo <b>java</b> arg1", Some("/")).unwrap();
    assert_eq!(markdown, to_markdown("<b>java</b> arg1", false));
    assert_eq!(markdown, "**java** arg1");
    assert_eq!(args, vec!["**java**", "arg1"]);
}

#[test]
fn formatting_carried_into_args() {
    let (_, markdown, args) = pipeline("<b>/define java script</b>", Some("/")).unwrap();
    assert_eq!(markdown, "**java script**");
    assert_eq!(args, vec!["**java", "script**"]);
}

#[test]
fn escaped_quote_stays_in_one_token() {
    assert_eq!(split_args(r#"a\"b"#), vec![r#"a"b"#]);
    let (_, _, args) = pipeline(r#"/say a\"b c"#, Some("/")).unwrap();
    assert_eq!(args, vec![r#"a"b"#, "c"]);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\n\t")]
fn blank_content_has_no_args(#[case] content: &str) {
    assert!(split_args(content).is_empty());
    let command = Command::from_message(Message::new(format!("/define {content}")), Some("/"))
        .unwrap();
    assert!(command.content_as_args().is_empty());
}

#[test]
fn fixed_width_content_is_not_reformatted() {
    let body = "/code   fn main() {\n      println!(&quot;hi&quot;);\n  }";
    let command =
        Command::from_message(Message::new(body).with_fixed_width_font(true), Some("/")).unwrap();
    assert_eq!(
        command.content_markdown(),
        "  fn main() {\n      println!(\"hi\");\n  }"
    );
    assert_eq!(
        command.content_as_args(),
        vec!["fn", "main()", "{", "println!(hi", ");", "}"]
    );
}

#[rstest]
#[case("<b>/define <i>x</i> y</b>", &["<b>"])]
#[case("<i><b>/define</b><code>x y</code></i> z", &[])]
#[case(r#"<a href="u"><b>/define java</b> more</a>"#, &[r#"<a href="u">"#])]
fn resplitting_content_does_not_duplicate_tags(#[case] body: &str, #[case] expected: &[&str]) {
    let first = Command::from_message(Message::new(body), Some("/")).unwrap();
    assert!(first.content().starts_with(&split(body).open_tag_prefix()));

    let second = split(first.content());
    assert_eq!(second.open_tags_before_command_name, expected);
}

#[test]
fn resplit_of_carried_bold_keeps_single_bold() {
    let first = Command::from_message(Message::new("<b>/define <i>x</i> y</b>"), Some("/")).unwrap();
    assert_eq!(first.content(), "<b><i>x</i> y</b>");

    let second = split(first.content());
    assert_eq!(second.command_name_raw, "x");
    assert_eq!(second.open_tags_before_command_name, vec!["<b>"]);
    assert_eq!(second.content(first.content()), Some("y</b>"));
}

#[test]
fn commands_hash_and_compare_by_value() {
    use std::collections::HashSet;

    let message = Message::new("/define java").with_id(7);
    let a = Command::from_message(message.clone(), Some("/")).unwrap();
    let b = Command::from_message(message, Some("/")).unwrap();

    let set: HashSet<_> = [a, b].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn commands_can_borrow_their_message() {
    let message = Message::new("/define java").with_author("alice");
    let command = Command::from_message(&message, Some("/")).unwrap();
    assert_eq!(command.message().author.as_deref(), Some("alice"));
    assert_eq!(command.command_name(), "define");
}

#[test]
fn parses_concurrently() {
    let bodies: Vec<String> = (0..8).map(|i| format!("<b>/cmd{i} arg{i}</b>")).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = bodies
            .iter()
            .map(|body| scope.spawn(move || pipeline(body, Some("/")).unwrap()))
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let (name, markdown, _) = handle.join().unwrap();
            assert_eq!(name, format!("cmd{i}"));
            assert_eq!(markdown, format!("**arg{i}**"));
        }
    });
}
