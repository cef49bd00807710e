use crate::finding::{RunReport, Severity};
use crate::rules;
use serde_sarif::sarif::{
    ArtifactLocation, Location, Message, MultiformatMessageString, PhysicalLocation,
    ReportingDescriptor, Result as SarifResult, ResultLevel, Run, Sarif, Tool, ToolComponent,
};
use std::collections::HashMap;

pub fn format(report: &RunReport) -> String {
    // Descriptors come from the static rule catalogue so every rule is
    // listed even when it produced no finding in this run.
    let catalogue = rules::all_rules();

    let rule_index: HashMap<&str, i64> = catalogue
        .iter()
        .enumerate()
        .map(|(i, info)| (info.id, i as i64))
        .collect();

    let descriptors: Vec<ReportingDescriptor> = catalogue
        .iter()
        .map(|info| {
            let mut rule = ReportingDescriptor::builder().id(info.id.to_string()).build();
            rule.short_description = Some(
                MultiformatMessageString::builder()
                    .text(info.message.to_string())
                    .build(),
            );
            rule.help = Some(
                MultiformatMessageString::builder()
                    .text(info.remediation.to_string())
                    .build(),
            );
            rule
        })
        .collect();

    let results: Vec<SarifResult> = report
        .skills
        .iter()
        .flat_map(|skill| {
            let rule_index = &rule_index;
            let uri = skill.path.to_string_lossy().replace('\\', "/");
            skill.findings.iter().map(move |f| {
                let level = match f.severity {
                    Severity::Fail => ResultLevel::Error,
                    Severity::Warn => ResultLevel::Warning,
                    Severity::Pass => ResultLevel::Note,
                };

                let mut result = SarifResult::builder()
                    .message(Message::builder().text(f.message.clone()).build())
                    .build();

                result.rule_id = Some(f.rule.to_string());
                result.level = Some(level);
                result.rule_index = rule_index.get(f.rule).copied();

                let mut location = Location::builder().build();
                let mut physical = PhysicalLocation::builder().build();
                physical.artifact_location =
                    Some(ArtifactLocation::builder().uri(uri.clone()).build());
                location.physical_location = Some(physical);
                result.locations = Some(vec![location]);

                result
            })
        })
        .collect();

    let driver = ToolComponent::builder()
        .name("skillcheck")
        .version(env!("CARGO_PKG_VERSION").to_string())
        .rules(descriptors)
        .build();

    let tool = Tool::builder().driver(driver).build();

    let run = Run::builder().tool(tool).results(results).build();

    let sarif = Sarif::builder().version("2.1.0").runs(vec![run]).build();

    serde_json::to_string_pretty(&sarif).expect("SARIF serialization failed")
}
