//! Server-rendered HTML for the single analysis page.

use pulldown_cmark::{html, Event, Options, Parser};

pub const PAGE_TITLE: &str = "AI Resume Critiquer";
pub const ANALYSIS_HEADING: &str = "📊 Resume Analysis";
const INTRO: &str = "Upload your resume and get AI-powered feedback tailored to your needs!";

/// What the output region of the page shows.
pub enum Outcome<'a> {
    Empty,
    Critique(&'a str),
    Error(&'a str),
}

pub struct PageView<'a> {
    /// Upload and analyze controls are only rendered when the service is configured.
    pub controls: bool,
    /// Echoed back into the role field.
    pub job_role: &'a str,
    pub outcome: Outcome<'a>,
}

pub fn render_page(view: &PageView<'_>) -> String {
    let controls = if view.controls {
        render_form(view.job_role)
    } else {
        String::new()
    };

    let outcome = match view.outcome {
        Outcome::Empty => String::new(),
        Outcome::Critique(markdown) => format!(
            "<section class=\"analysis\">\n<h2>{ANALYSIS_HEADING}</h2>\n{}</section>\n",
            markdown_to_html(markdown)
        ),
        Outcome::Error(message) => format!(
            "<div class=\"error\" role=\"alert\">{}</div>\n",
            escape_html(message)
        ),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{PAGE_TITLE}</title>
<style>
body {{ max-width: 46rem; margin: 2rem auto; padding: 0 1rem; font-family: system-ui, sans-serif; line-height: 1.5; }}
form {{ display: grid; gap: 0.75rem; margin: 1.5rem 0; }}
.error {{ background: #fdecea; color: #8a1c1c; padding: 0.75rem 1rem; border-radius: 0.4rem; }}
</style>
</head>
<body>
<h1>{PAGE_TITLE}</h1>
<p>{INTRO}</p>
{controls}{outcome}</body>
</html>
"#
    )
}

fn render_form(job_role: &str) -> String {
    format!(
        r#"<form method="post" action="/analyze" enctype="multipart/form-data">
<label for="resume">Upload your resume (PDF or TXT)</label>
<input id="resume" type="file" name="resume" accept=".pdf,.txt,application/pdf,text/plain" required>
<label for="job_role">Enter the job role you're targeting (optional)</label>
<input id="job_role" type="text" name="job_role" value="{}">
<button type="submit">Analyze Resume</button>
</form>
"#,
        escape_html(job_role)
    )
}

/// Renders model output as markdown. Raw HTML in the output is shown as text.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(
        markdown,
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH,
    )
    .map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    // writing into a String never fails
    let _ = pulldown_cmark_escape::escape_html(&mut out, text);
    out
}
