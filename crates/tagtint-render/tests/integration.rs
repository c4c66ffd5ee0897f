use serde::Serialize;
use tagtint_render::{
    Color, OutputMode, ParseError, RenderError, Renderer, Style, Theme, Token, Typography,
};

#[derive(Serialize)]
struct Showcase {
    from_template: String,
    items: Vec<String>,
}

fn showcase() -> Showcase {
    Showcase {
        from_template: "Hello from template".into(),
        items: vec!["Item 1".into(), "Item 2".into()],
    }
}

const SHOWCASE: &str = "#(blue)[Welcome to #(red)[tagtint]!]
#(green,italic)[{{ from_template }} in italic]
#(cyan,bold)[<some brackets> in bold]
{%- for item in items %}
#(yellow,bold)[{{ item }}]{% endfor %}";

#[test]
fn test_output_modes() {
    let input = "#red[hello] #bold[world]";

    let text = Renderer::new().with_output(OutputMode::Text);
    assert_eq!(text.render(input).unwrap(), "hello world");

    let term = Renderer::new().with_output(OutputMode::Term);
    let output = term.render(input).unwrap();
    assert!(output.contains("\x1b[31m"));
    assert!(output.contains("\x1b[1m"));
    assert!(output.contains("hello"));
    assert!(output.contains("world"));
}

#[test]
fn test_compact_ansi_output() {
    // One open and one reset per styled token, not per character.
    let term = Renderer::new().with_output(OutputMode::Term);
    let output = term.render("#red[text]").unwrap();
    assert_eq!(output.matches("\x1b[").count(), 2, "output: {:?}", output);
}

#[test]
fn test_showcase_template() {
    let renderer = Renderer::new().with_output(OutputMode::Text);
    let output = renderer.render_with(SHOWCASE, &showcase()).unwrap();
    assert_eq!(
        output,
        "Welcome to tagtint!\n\
         Hello from template in italic\n\
         <some brackets> in bold\n\
         Item 1\n\
         Item 2"
    );
}

#[test]
fn test_showcase_tokens() {
    let renderer = Renderer::new().with_context(&showcase()).unwrap();
    let tokens: Vec<Token> = renderer
        .tokens(SHOWCASE)
        .unwrap()
        .into_iter()
        .filter(|t| !t.text.is_empty())
        .collect();

    let yellow_bold = Style::new()
        .color(Color::Yellow)
        .typography(Typography::Bold);
    assert_eq!(tokens[0], Token::styled("Welcome to ", Style::new().color(Color::Blue)));
    assert_eq!(tokens[1], Token::styled("tagtint", Style::new().color(Color::Red)));
    assert_eq!(tokens[2], Token::styled("!", Style::new().color(Color::Blue)));
    assert_eq!(tokens.last(), Some(&Token::styled("Item 2", yellow_bold)));
}

#[test]
fn test_alternate_delimiters_render() {
    let renderer = Renderer::new()
        .with_tag_marker('@')
        .with_delimiters('<', '>')
        .with_output(OutputMode::Term);
    let output = renderer.render("@green<[link](url)> and #not[a tag]").unwrap();
    assert_eq!(output, "\x1b[32m[link](url)\x1b[0m and #not[a tag]");
}

#[test]
fn test_theme_palette_flows_through_renderer() {
    let renderer = Renderer::new()
        .with_output(OutputMode::Term)
        .with_theme(Theme::new().with_color(Color::Cyan, console::Color::Color256(51)));
    let output = renderer.render("#cyan[x]").unwrap();
    assert_eq!(output, "\x1b[38;5;51mx\x1b[0m");
}

#[test]
fn test_errors_return_no_output() {
    let renderer = Renderer::new().with_output(OutputMode::Text);

    assert!(matches!(
        renderer.render("#red[unterminated"),
        Err(RenderError::Parse(ParseError::Unbalanced { .. }))
    ));
    assert!(matches!(
        renderer.render("extra]"),
        Err(RenderError::Parse(ParseError::UnmatchedClose { .. }))
    ));
    assert!(matches!(
        renderer.render_with("{{ nope.deeper }}", &serde_json::json!({})),
        Err(RenderError::Template(_))
    ));
}

#[test]
fn test_rendering_is_idempotent() {
    let renderer = Renderer::new().with_output(OutputMode::Term);
    let input = "A #red[B #bold[C]] D";
    assert_eq!(renderer.render(input).unwrap(), renderer.render(input).unwrap());
}
