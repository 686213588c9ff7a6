//! HTML rendering for the upload form and the result page.

use crate::pipeline::MatchAnalysis;
use crate::skills::{EducationProfile, SkillSet};

const PAGE_STYLE: &str = "body{font-family:system-ui,sans-serif;max-width:52rem;margin:2rem auto;padding:0 1rem;line-height:1.5}\
label{display:block;margin-top:1rem;font-weight:600}\
textarea{width:100%;min-height:12rem}\
.score{font-size:2rem;font-weight:700}\
.muted{color:#666}";

/// Empty upload form for GET /.
pub fn render_form() -> String {
    page(
        "Resume Matcher",
        r#"<h1>Resume Matcher</h1>
<form method="post" action="/" enctype="multipart/form-data">
  <label for="resume">Resume (.txt, .pdf, .docx)</label>
  <input type="file" id="resume" name="resume" accept=".txt,.pdf,.docx">
  <label for="job_description">Job description</label>
  <textarea id="job_description" name="job_description"></textarea>
  <p><button type="submit">Match</button></p>
</form>"#,
    )
}

/// Result page for one analysis, served by POST /.
pub fn render_result(analysis: &MatchAnalysis) -> String {
    let mut body = String::new();

    body.push_str("<h1>Match Result</h1>\n");
    body.push_str(&format!(
        "<p class=\"score\">{:.2}%</p>\n<p class=\"muted\">Exact skill match {:.2}% &middot; overall fit {:.2}% &middot; readability {:.2}</p>\n",
        analysis.report.score,
        analysis.skill_accuracy,
        analysis.final_fit,
        analysis.quality.readability_score(),
    ));

    body.push_str("<h2>Skills</h2>\n<dl>\n");
    body.push_str(&definition("Resume skills", &skill_list(&analysis.resume_skills)));
    body.push_str(&definition("Job skills", &skill_list(&analysis.job_skills)));
    body.push_str(&definition("Matched", &skill_list(analysis.semantic.matched())));
    body.push_str(&definition("Missing", &skill_list(analysis.semantic.missing())));
    body.push_str("</dl>\n");

    body.push_str("<h2>Education</h2>\n<dl>\n");
    body.push_str(&definition("Resume", &education_summary(&analysis.resume_education)));
    body.push_str(&definition("Job", &education_summary(&analysis.job_education)));
    let met = if analysis.education_met() { "yes" } else { "no" };
    body.push_str(&definition("Requirements met", met));
    body.push_str("</dl>\n");

    body.push_str("<h2>Suggestions</h2>\n");
    body.push_str(&bullet_list(&analysis.report.suggestions));

    body.push_str("<h2>Resume feedback</h2>\n");
    body.push_str(&bullet_list(&analysis.feedback));

    if !analysis.sections.is_empty() {
        let names: Vec<&str> = analysis.sections.iter().map(|s| s.as_str()).collect();
        body.push_str(&format!(
            "<p class=\"muted\">Sections detected: {}</p>\n",
            html_escape(&names.join(", "))
        ));
    }

    body.push_str("<p><a href=\"/\">Match another resume</a></p>\n");

    page("Match Result", &body)
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        html_escape(title),
        PAGE_STYLE,
        body
    )
}

fn definition(term: &str, value: &str) -> String {
    format!("<dt>{}</dt><dd>{}</dd>\n", html_escape(term), html_escape(value))
}

fn skill_list(skills: &SkillSet) -> String {
    if skills.is_empty() {
        return "none".to_string();
    }
    skills.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

fn education_summary(profile: &EducationProfile) -> String {
    let levels: Vec<&str> = profile.levels().into_iter().map(|l| l.as_str()).collect();
    let levels = if levels.is_empty() {
        "no degree level".to_string()
    } else {
        levels.join(", ")
    };
    if profile.streams.is_empty() {
        levels
    } else {
        format!("{levels} ({})", profile.streams.join(", "))
    }
}

fn bullet_list(items: &[String]) -> String {
    let mut html = String::from("<ul>\n");
    for item in items {
        html.push_str(&format!("  <li>{}</li>\n", html_escape(item)));
    }
    html.push_str("</ul>\n");
    html
}

/// Escape HTML special characters to prevent XSS
fn html_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
