use eoi_calculator::scoring::{
    questionnaire, AnswerDraft, AnswerError, Assessment, LanguageTrack, QuestionDefinition,
    QuestionKind, Tier,
};
use std::fmt::Write;

const TITLE: &str = "Alberta Advantage Immigration Program (AAIP) - Worker EOI Calculator";

pub(crate) fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn track_suffix(question: &QuestionDefinition) -> &'static str {
    match question.track {
        Some(LanguageTrack::English) => " (if English)",
        Some(LanguageTrack::French) => " (if French)",
        None => "",
    }
}

fn tier_class(tier: Tier) -> &'static str {
    match tier {
        Tier::Strong => "info",
        Tier::Moderate => "warning",
        Tier::Low => "error",
    }
}

fn render_question(
    html: &mut String,
    question: &QuestionDefinition,
    draft: &AnswerDraft,
    error: Option<&AnswerError>,
) {
    let flagged = error.is_some_and(|error| error.question() == question.id);
    let class = if flagged { "question invalid" } else { "question" };
    writeln!(html, "<div class=\"{class}\">").expect("write question wrapper");

    match &question.kind {
        QuestionKind::Select { scored, options } => {
            writeln!(
                html,
                "<label for=\"{key}\">{prompt}{suffix}</label>\n<select id=\"{key}\" name=\"{key}\">",
                key = question.key,
                prompt = escape_html(question.prompt),
                suffix = track_suffix(question),
            )
            .expect("write select label");
            let selected = draft.selection(question.id);
            let placeholder = if selected.is_none() { " selected" } else { "" };
            writeln!(
                html,
                "<option value=\"\"{placeholder}>Select an option</option>"
            )
            .expect("write placeholder option");
            for option in options {
                let marker = if selected.map(str::trim) == Some(option.key) {
                    " selected"
                } else {
                    ""
                };
                let points = if *scored {
                    format!(" ({} pts)", option.points)
                } else {
                    String::new()
                };
                writeln!(
                    html,
                    "<option value=\"{}\"{marker}>{}{points}</option>",
                    option.key,
                    escape_html(option.label),
                )
                .expect("write option");
            }
            html.push_str("</select>\n");
        }
        QuestionKind::Checkbox { points } => {
            let checked = if draft.checked(question.id) {
                " checked"
            } else {
                ""
            };
            writeln!(
                html,
                "<label><input type=\"checkbox\" name=\"{}\" value=\"on\"{checked}> {} ({points} pts)</label>",
                question.key,
                escape_html(question.prompt),
            )
            .expect("write checkbox");
        }
    }

    html.push_str("</div>\n");
}

fn render_results(html: &mut String, assessment: &Assessment) {
    html.push_str("<section class=\"results\">\n");
    writeln!(
        html,
        "<p class=\"success\">{}</p>",
        escape_html(&assessment.breakdown.headline())
    )
    .expect("write headline");
    html.push_str("<h3>Detailed Points Breakdown</h3>\n<ul>\n");
    for line in assessment.breakdown.lines() {
        writeln!(html, "<li>{}</li>", escape_html(&line.to_string()))
            .expect("write breakdown line");
    }
    html.push_str("</ul>\n");
    writeln!(
        html,
        "<p class=\"{}\">{}</p>",
        tier_class(assessment.tier),
        escape_html(assessment.tier.message())
    )
    .expect("write tier message");
    html.push_str("</section>\n");
}

/// Full calculator page. Prior selections are kept so a rejected submission can be fixed in place.
pub(crate) fn form_page(
    draft: &AnswerDraft,
    assessment: Option<&Assessment>,
    error: Option<&AnswerError>,
) -> String {
    let mut html = String::with_capacity(16 * 1024);
    writeln!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>AAIP Worker EOI Calculator</title>\n</head>\n<body>\n<main>\n<h1>{}</h1>",
        escape_html(TITLE)
    )
    .expect("write page header");
    html.push_str(
        "<p>This tool calculates your points according to the <strong>AAIP Worker Expression of Interest Points Grid</strong>.</p>\n",
    );

    if let Some(error) = error {
        writeln!(
            html,
            "<p class=\"error\" role=\"alert\">{}</p>",
            escape_html(&error.to_string())
        )
        .expect("write error alert");
    }

    html.push_str("<form method=\"post\" action=\"/\">\n");
    for section in questionnaire() {
        writeln!(
            html,
            "<fieldset>\n<legend>{}. {}</legend>",
            section.number,
            escape_html(section.title)
        )
        .expect("write section legend");
        if let Some(note) = section.note {
            writeln!(html, "<p class=\"note\">{}</p>", escape_html(note))
                .expect("write section note");
        }
        for question in &section.questions {
            render_question(&mut html, question, draft, error);
        }
        html.push_str("</fieldset>\n");
    }
    html.push_str("<button type=\"submit\">Calculate My AAIP EOI Score</button>\n</form>\n");

    if let Some(assessment) = assessment {
        render_results(&mut html, assessment);
    }

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

/// Plain-text results panel for the CLI.
pub(crate) fn text_report(assessment: &Assessment) -> String {
    let mut report = String::new();
    writeln!(report, "{}", assessment.breakdown.headline()).expect("write headline");
    writeln!(report).expect("write blank line");
    writeln!(report, "Detailed Points Breakdown").expect("write breakdown heading");
    for line in assessment.breakdown.lines() {
        writeln!(report, "  {line}").expect("write breakdown line");
    }
    writeln!(report).expect("write blank line");
    writeln!(
        report,
        "[{}] {}",
        assessment.tier.label(),
        assessment.tier.message()
    )
    .expect("write tier message");
    report
}

/// Questionnaire listing with the option keys the CLI accepts.
pub(crate) fn questions_listing() -> String {
    let mut listing = String::new();
    for section in questionnaire() {
        writeln!(listing, "{}. {}", section.number, section.title).expect("write section heading");
        if let Some(note) = section.note {
            writeln!(listing, "   {note}").expect("write section note");
        }
        for question in &section.questions {
            writeln!(
                listing,
                "   --{}: {}{}",
                question.key.replace('_', "-"),
                question.prompt,
                track_suffix(question)
            )
            .expect("write question flag");
            match &question.kind {
                QuestionKind::Select { scored, options } => {
                    for option in options {
                        if *scored {
                            writeln!(
                                listing,
                                "       {:<24} {} ({} pts)",
                                option.key, option.label, option.points
                            )
                            .expect("write scored option");
                        } else {
                            writeln!(listing, "       {:<24} {}", option.key, option.label)
                                .expect("write option");
                        }
                    }
                }
                QuestionKind::Checkbox { points } => {
                    writeln!(listing, "       flag, {points} pts when set")
                        .expect("write checkbox points");
                }
            }
        }
    }
    listing
}

#[cfg(test)]
mod tests {
    use super::*;
    use eoi_calculator::scoring::{MissingAnswerPolicy, QuestionId};

    fn strong_draft() -> AnswerDraft {
        AnswerDraft {
            education: Some("masters".to_string()),
            education_location: Some("alberta".to_string()),
            language: Some("english".to_string()),
            english_score: Some("6".to_string()),
            french_score: None,
            bilingual: true,
            total_experience: Some("12_plus".to_string()),
            canadian_experience: Some("alberta_6_plus".to_string()),
            age: Some("21_34".to_string()),
            family_connection: true,
            job_offer: true,
            special_job_offer: Some("tourism_hospitality".to_string()),
            job_location: Some("other_alberta".to_string()),
            regulated_occupation: true,
        }
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html("<a href=\"x\">Tom & Jerry's</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn blank_form_has_no_preselected_answers() {
        let html = form_page(&AnswerDraft::default(), None, None);

        assert!(html.contains("<option value=\"\" selected>Select an option</option>"));
        assert!(!html.contains("value=\"doctorate\" selected"));
        assert!(!html.contains(" checked>"));
        assert!(html.contains("Calculate My AAIP EOI Score"));
        assert!(!html.contains("Detailed Points Breakdown"));
    }

    #[test]
    fn results_panel_keeps_selections() {
        let draft = strong_draft();
        let assessment = draft
            .resolve(MissingAnswerPolicy::Reject)
            .map(Assessment::from_answers)
            .expect("draft resolves");

        let html = form_page(&draft, Some(&assessment), None);

        assert!(html.contains("<option value=\"masters\" selected>"));
        assert!(html.contains("name=\"bilingual\" value=\"on\" checked"));
        assert!(html.contains("Your total AAIP Worker EOI score is: 98 / 100"));
        assert!(html.contains("<li>Education: 10 + Education Location: 10</li>"));
        assert!(html.contains("class=\"info\">Strong profile"));
    }

    #[test]
    fn flags_the_question_in_error() {
        let error = AnswerError::MissingSelection {
            question: QuestionId::Age,
        };
        let html = form_page(&AnswerDraft::default(), None, Some(&error));

        assert!(html.contains("role=\"alert\">please answer &quot;Age group&quot;"));
        assert_eq!(html.matches("question invalid").count(), 1);
        assert!(html.contains("<div class=\"question invalid\">\n<label for=\"age\">"));
    }

    #[test]
    fn text_report_lists_nine_lines_and_tier() {
        let assessment = strong_draft()
            .resolve(MissingAnswerPolicy::Reject)
            .map(Assessment::from_answers)
            .expect("draft resolves");

        let report = text_report(&assessment);

        assert_eq!(report.matches("\n  ").count(), 9);
        assert!(report.contains("[Strong] Strong profile"));
    }

    #[test]
    fn listing_names_cli_flags() {
        let listing = questions_listing();

        assert!(listing.contains("--education-location"));
        assert!(listing.contains("tourism_hospitality"));
        assert!(listing.contains("--english-score: Lowest CLB score across all abilities (if English)"));
    }
}
