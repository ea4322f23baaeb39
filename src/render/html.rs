//! HTML fragment generation
//!
//! Every function returns a complete fragment for the results area, so
//! rendering twice never leaves pieces of the previous result behind. All
//! text coming from the user or the service is escaped.

use crate::api::{AnalysisResult, AnalysisStatus, RobotGroup, TestResult};
use crate::render::StatusTone;
use html_escape::encode_text;

/// Renders a full analysis result
///
/// Section order: test results (only if any), status, groups (only if any),
/// warnings (only if any). Empty collections produce no container at all.
pub fn render_results(result: &AnalysisResult) -> String {
    let mut html = String::new();

    html.push_str("<h2 class=\"text-2xl font-semibold mb-6\">Results</h2>\n");

    if !result.test_results.is_empty() {
        push_test_results(&mut html, &result.test_results);
    }

    push_status(&mut html, &result.status);

    if !result.groups.is_empty() {
        push_groups(&mut html, &result.groups);
    }

    if !result.warnings.is_empty() {
        push_warnings(&mut html, &result.warnings);
    }

    html
}

/// Renders the error panel
pub fn render_error(message: &str) -> String {
    format!(
        concat!(
            "<div id=\"error\" class=\"bg-red-600 border border-red-500 rounded-lg p-4\">\n",
            "  <h3 class=\"text-sm font-medium text-red-300\">Error</h3>\n",
            "  <div class=\"error-message mt-2 text-sm text-red-200\">{}</div>\n",
            "</div>\n"
        ),
        encode_text(message)
    )
}

/// Renders the in-progress indicator shown while a request is pending
pub fn render_loader() -> String {
    concat!(
        "<div id=\"loader\" class=\"text-center py-12\">\n",
        "  <div class=\"inline-block animate-spin rounded-full h-12 w-12 border-b-2 border-blue-500\"></div>\n",
        "  <p class=\"mt-4 text-gray-300\">Analysis in progress...</p>\n",
        "</div>\n"
    )
    .to_string()
}

/// Wraps a results fragment in a standalone HTML document
pub fn page(fragment: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<title>Robots.txt Checker</title>\n");
    html.push_str("</head>\n<body class=\"bg-gray-900 text-white\">\n");
    html.push_str("<main id=\"results\">\n");
    html.push_str(fragment);
    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn push_test_results(html: &mut String, results: &[TestResult]) {
    html.push_str("<section id=\"test-results\" class=\"mb-6\">\n");
    html.push_str("<h3 class=\"text-lg font-medium mb-3\">Path test results</h3>\n");
    html.push_str("<table class=\"min-w-full bg-gray-800 rounded-lg\">\n");
    html.push_str("<thead class=\"bg-gray-700\"><tr>");
    for heading in ["Tested path", "User-Agent", "Result", "Applied rule"] {
        html.push_str(&format!(
            "<th class=\"px-4 py-3 text-left text-sm font-medium text-gray-300\">{}</th>",
            heading
        ));
    }
    html.push_str("</tr></thead>\n");
    html.push_str("<tbody class=\"divide-y divide-gray-700\">\n");

    for test in results {
        let (row_class, badge_class, badge, rule_color) = if test.allowed {
            ("allowed bg-gray-800", "bg-green-600 text-green-100", "✓ ALLOWED", "text-green-400")
        } else {
            ("blocked bg-red-900/20", "bg-red-600 text-red-100", "✗ BLOCKED", "text-red-400")
        };

        html.push_str(&format!("<tr class=\"test-row {}\">\n", row_class));
        html.push_str(&format!(
            "  <td class=\"path px-4 py-3 text-sm font-mono text-white\">{}</td>\n",
            encode_text(&test.path)
        ));
        html.push_str(&format!(
            "  <td class=\"agent px-4 py-3 text-sm font-mono text-gray-300\">{}</td>\n",
            encode_text(&test.user_agent)
        ));
        html.push_str(&format!(
            "  <td class=\"px-4 py-3 text-sm\"><span class=\"badge inline-flex px-3 py-1 text-xs font-semibold rounded-full {}\">{}</span></td>\n",
            badge_class, badge
        ));
        match &test.matched_rule {
            Some(rule) => html.push_str(&format!(
                "  <td class=\"px-4 py-3 text-sm\"><code class=\"rule text-xs bg-gray-700 px-2 py-1 rounded {}\">{}</code></td>\n",
                rule_color,
                encode_text(rule)
            )),
            None => html.push_str(
                "  <td class=\"px-4 py-3 text-sm\"><span class=\"no-rule text-gray-500 text-xs\">No specific rule</span></td>\n",
            ),
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>\n");
    html.push_str("<p class=\"mt-3 text-xs text-gray-400\">Blocked paths are shown on a red background, next to the rule that applies.</p>\n");
    html.push_str("</section>\n");
}

fn push_status(html: &mut String, status: &AnalysisStatus) {
    let tone = StatusTone::from_code(status.code);

    html.push_str("<section id=\"status\" class=\"mb-6\">\n");
    html.push_str("<h3 class=\"text-lg font-medium mb-3\">Status</h3>\n");
    html.push_str("<div class=\"bg-gray-800 rounded-lg p-4\">\n");
    html.push_str(&format!(
        "  <div class=\"indicator w-3 h-3 rounded-full {}\"></div>\n",
        tone.css_class()
    ));
    html.push_str(&format!(
        "  <span class=\"code font-medium\">Code: {}</span>\n",
        status.code
    ));
    html.push_str(&format!(
        "  <span class=\"message text-gray-400\">{}</span>\n",
        encode_text(&status.message)
    ));
    // A zero size means nothing was fetched, same as an absent one
    if let Some(size) = status.size.filter(|s| *s > 0) {
        html.push_str(&format!(
            "  <p class=\"size mt-2 text-sm text-gray-400\">Size: {} characters</p>\n",
            size
        ));
    }
    html.push_str("</div>\n</section>\n");
}

fn push_groups(html: &mut String, groups: &[RobotGroup]) {
    html.push_str("<section id=\"groups\" class=\"mb-6\">\n");
    html.push_str("<h3 class=\"text-lg font-medium mb-3\">Detected User-Agent groups</h3>\n");
    html.push_str("<div class=\"grid gap-4 md:grid-cols-2 lg:grid-cols-3\">\n");

    for group in groups {
        html.push_str("<div class=\"group-card bg-gray-800 rounded-lg p-4\">\n");
        html.push_str(&format!(
            "  <h4 class=\"font-mono text-blue-400 font-medium mb-2\">{}</h4>\n",
            encode_text(&group.user_agent)
        ));
        html.push_str(&format!(
            "  <div class=\"allow\"><span class=\"text-green-400\">Allow:</span> {}</div>\n",
            rule_count(group.allow_rules.len())
        ));
        html.push_str(&format!(
            "  <div class=\"disallow\"><span class=\"text-red-400\">Disallow:</span> {}</div>\n",
            rule_count(group.disallow_rules.len())
        ));
        if !group.sitemaps.is_empty() {
            html.push_str(&format!(
                "  <div class=\"sitemaps\"><span class=\"text-blue-400\">Sitemaps:</span> {}</div>\n",
                group.sitemaps.len()
            ));
        }
        html.push_str("</div>\n");
    }

    html.push_str("</div>\n</section>\n");
}

fn push_warnings(html: &mut String, warnings: &[String]) {
    html.push_str("<section id=\"warnings\" class=\"mb-6\">\n");
    html.push_str("<h3 class=\"text-lg font-medium mb-3\">Warnings</h3>\n");
    html.push_str("<div class=\"space-y-2\">\n");
    for warning in warnings {
        html.push_str(&format!(
            "<div class=\"warning bg-yellow-600 border border-yellow-500 rounded-lg p-3\"><span class=\"text-yellow-100\">{}</span></div>\n",
            encode_text(warning)
        ));
    }
    html.push_str("</div>\n</section>\n");
}

fn rule_count(count: usize) -> String {
    if count == 0 {
        "None".to_string()
    } else {
        format!("{} rule(s)", count)
    }
}
