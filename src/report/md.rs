use crate::types::report::PlanReport;

pub fn to_markdown(report: &PlanReport) -> String {
    let output = &report.output;
    let mut rendered = String::new();
    rendered.push_str("# Golf Expense & Practice Plan\n\n");
    rendered.push_str("## Summary\n\n");
    rendered.push_str(&format!(
        "- Estimated monthly cost: ${:.2}\n- Practice quality score: {:.1} / 100\n- Course experience score: {:.0} / 100\n- Weighted overall suitability score: {:.1} / 100\n\n",
        output.total_cost, output.practice_score, output.experience_score, output.overall_score
    ));

    if report.over_budget {
        rendered.push_str(&format!(
            "warning: estimated cost ${:.2} exceeds your monthly budget of ${:.2}\n\n",
            output.total_cost, report.input.budget
        ));
    }

    rendered.push_str("## Practice Suggestions\n\n");
    for suggestion in &output.suggestions {
        rendered.push_str(&format!("- {}\n", suggestion.message()));
    }

    rendered
}
