//! Fragments for the business-documentation block kinds.
//!
//! Each handler voids the block (returns `None`) when its primary
//! identifying field is missing: the process name, the role title, the
//! maturity domain, or a non-empty controls/steps sequence. Substructure
//! items are escaped individually; the card styling and icon prefixes are
//! cosmetic.

use crate::blocks::{
    BusinessProcessData, ControlMatrixData, MaturityModelData, ProcessFlowData,
    RoleDefinitionData,
};

use super::inline::escape;

pub(super) fn business_process(data: &BusinessProcessData) -> Option<String> {
    let name = escape(&data.name);
    if name.is_empty() {
        return None;
    }

    let mut html = String::from(
        "<div class=\"business-process border-l-4 border-blue-500 bg-blue-50 p-6 my-8 rounded-r-lg\">",
    );
    html.push_str(&format!(
        "<h4 class=\"text-xl font-semibold text-blue-900 mb-3\">\u{1F4CB} {name}</h4>"
    ));

    let description = escape(&data.description);
    if !description.is_empty() {
        html.push_str(&format!("<p class=\"text-blue-800 mb-4\">{description}</p>"));
    }

    let owner = escape(&data.owner);
    if !owner.is_empty() {
        html.push_str(&format!(
            "<p class=\"text-sm text-blue-700 mb-4\"><strong>Process Owner:</strong> {owner}</p>"
        ));
    }

    if !data.steps.is_empty() {
        html.push_str("<ol class=\"space-y-3 list-decimal pl-6\">");
        for step in &data.steps {
            let text = escape(&step.description);
            if !text.is_empty() {
                html.push_str(&format!("<li class=\"text-blue-800\">{text}</li>"));
            }
        }
        html.push_str("</ol>");
    }

    html.push_str("</div>");
    Some(html)
}

pub(super) fn control_matrix(data: &ControlMatrixData) -> Option<String> {
    if data.controls.is_empty() {
        return None;
    }

    let mut html = String::from("<div class=\"control-matrix my-8\">");
    html.push_str(
        "<h4 class=\"text-xl font-semibold text-red-900 mb-4\">\u{1F6E1}\u{FE0F} Control Matrix</h4>",
    );
    html.push_str("<div class=\"overflow-x-auto\">");
    html.push_str("<table class=\"min-w-full bg-white border border-red-200 rounded-lg\">");
    html.push_str("<thead class=\"bg-red-50\">");
    html.push_str("<tr><th class=\"px-4 py-3 text-left font-medium text-red-900\">Control ID</th>");
    html.push_str("<th class=\"px-4 py-3 text-left font-medium text-red-900\">Description</th>");
    html.push_str("<th class=\"px-4 py-3 text-left font-medium text-red-900\">Type</th>");
    html.push_str("<th class=\"px-4 py-3 text-left font-medium text-red-900\">Risk Level</th></tr>");
    html.push_str("</thead><tbody>");

    for control in &data.controls {
        html.push_str("<tr class=\"border-b border-red-100\">");
        html.push_str(&format!(
            "<td class=\"px-4 py-3 text-red-800\">{}</td>",
            escape(&control.id)
        ));
        html.push_str(&format!(
            "<td class=\"px-4 py-3 text-red-700\">{}</td>",
            escape(&control.description)
        ));
        html.push_str(&format!(
            "<td class=\"px-4 py-3 text-red-700\">{}</td>",
            escape(&control.control_type)
        ));
        html.push_str(&format!(
            "<td class=\"px-4 py-3 text-red-700\">{}</td>",
            escape(&control.risk)
        ));
        html.push_str("</tr>");
    }

    html.push_str("</tbody></table></div></div>");
    Some(html)
}

pub(super) fn role_definition(data: &RoleDefinitionData) -> Option<String> {
    let title = escape(&data.title);
    if title.is_empty() {
        return None;
    }

    let mut html = String::from(
        "<div class=\"role-definition border-l-4 border-green-500 bg-green-50 p-6 my-8 rounded-r-lg\">",
    );
    html.push_str(&format!(
        "<h4 class=\"text-xl font-semibold text-green-900 mb-3\">\u{1F464} {title}</h4>"
    ));

    let department = escape(&data.department);
    if !department.is_empty() {
        html.push_str(&format!(
            "<p class=\"text-sm text-green-700 mb-4\"><strong>Department:</strong> {department}</p>"
        ));
    }

    if !data.responsibilities.is_empty() {
        html.push_str("<div class=\"mb-4\">");
        html.push_str("<h5 class=\"font-medium text-green-800 mb-2\">Key Responsibilities:</h5>");
        html.push_str("<ul class=\"space-y-1 list-disc pl-6\">");
        for responsibility in &data.responsibilities {
            html.push_str(&format!(
                "<li class=\"text-green-800\">{}</li>",
                escape(responsibility)
            ));
        }
        html.push_str("</ul></div>");
    }

    if !data.skills.is_empty() {
        html.push_str("<div>");
        html.push_str("<h5 class=\"font-medium text-green-800 mb-2\">Required Skills:</h5>");
        html.push_str("<div class=\"flex flex-wrap gap-2\">");
        for skill in &data.skills {
            html.push_str(&format!(
                "<span class=\"bg-green-200 text-green-800 px-2 py-1 rounded text-sm\">{}</span>",
                escape(skill)
            ));
        }
        html.push_str("</div></div>");
    }

    html.push_str("</div>");
    Some(html)
}

pub(super) fn maturity_model(data: &MaturityModelData) -> Option<String> {
    let domain = escape(&data.domain);
    if domain.is_empty() {
        return None;
    }

    let mut html = String::from(
        "<div class=\"maturity-model border-l-4 border-purple-500 bg-purple-50 p-6 my-8 rounded-r-lg\">",
    );
    html.push_str(&format!(
        "<h4 class=\"text-xl font-semibold text-purple-900 mb-4\">\u{1F4CA} Maturity Model: {domain}</h4>"
    ));

    if !data.levels.is_empty() {
        html.push_str("<div class=\"space-y-3\">");
        for (i, level) in data.levels.iter().enumerate() {
            let number = i + 1;
            let name = match escape(&level.name) {
                n if n.is_empty() => format!("Level {number}"),
                n => n,
            };
            html.push_str("<div class=\"bg-white border border-purple-200 rounded p-4\">");
            html.push_str(&format!(
                "<h6 class=\"font-medium text-purple-900 mb-2\">Level {number}: {name}</h6>"
            ));
            let description = escape(&level.description);
            if !description.is_empty() {
                html.push_str(&format!(
                    "<p class=\"text-purple-800 text-sm\">{description}</p>"
                ));
            }
            html.push_str("</div>");
        }
        html.push_str("</div>");
    }

    html.push_str("</div>");
    Some(html)
}

pub(super) fn process_flow(data: &ProcessFlowData) -> Option<String> {
    if data.steps.is_empty() {
        return None;
    }

    let title = match escape(&data.title) {
        t if t.is_empty() => "Process Flow".to_string(),
        t => t,
    };

    let mut html = String::from("<div class=\"process-flow my-8\">");
    html.push_str(&format!(
        "<h4 class=\"text-xl font-semibold text-indigo-900 mb-4\">\u{1F504} {title}</h4>"
    ));
    html.push_str("<div class=\"flex flex-col space-y-4\">");

    let last = data.steps.len() - 1;
    for (i, step) in data.steps.iter().enumerate() {
        html.push_str("<div class=\"flex items-center\">");
        html.push_str(&format!(
            "<div class=\"flex-shrink-0 w-8 h-8 bg-indigo-500 text-white rounded-full flex items-center justify-center text-sm font-medium\">{}</div>",
            i + 1
        ));
        html.push_str("<div class=\"ml-4 flex-grow\">");
        html.push_str(&format!(
            "<p class=\"text-indigo-800\">{}</p>",
            escape(&step.text)
        ));
        html.push_str("</div></div>");

        if i != last {
            html.push_str("<div class=\"ml-4 w-px h-4 bg-indigo-300\"></div>");
        }
    }

    html.push_str("</div></div>");
    Some(html)
}
