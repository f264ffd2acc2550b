//! Tests for copy/move subject menu options.

use qt_model::{DataModel, ReportId, Reports, SubjectId, subject_options};

const REPORTS: &str = r#"{"reports": [
    {"report_uuid": "r2", "title": "Beta", "subjects": {
        "s3": {"name": "Frontend", "type": "software"}
    }},
    {"report_uuid": "r1", "title": "Alpha", "subjects": {
        "s2": {"type": "software"},
        "s1": {"name": "Backend", "type": "software"}
    }}
]}"#;

fn datamodel() -> DataModel {
    DataModel::from_json(r#"{"subjects": {"software": {"name": "Software"}}}"#).unwrap()
}

#[test]
fn copy_options_list_all_subjects_sorted_by_label() {
    let reports = Reports::from_json(REPORTS).unwrap();
    let options = subject_options(&reports.reports, &datamodel(), None);
    let labels: Vec<&str> = options.iter().map(|o| o.text.as_str()).collect();
    assert_eq!(
        labels,
        ["Alpha ⯈ Backend", "Alpha ⯈ Software", "Beta ⯈ Frontend"]
    );
    assert_eq!(options[1].subject_uuid, SubjectId::new("s2"));
    assert_eq!(options[1].report_uuid, ReportId::new("r1"));
}

#[test]
fn move_options_exclude_current_report() {
    let reports = Reports::from_json(REPORTS).unwrap();
    let current = ReportId::new("r1");
    let options = subject_options(&reports.reports, &datamodel(), Some(&current));
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].to_string(), "Beta ⯈ Frontend");
}

#[test]
fn no_reports_no_options() {
    assert!(subject_options(&[], &DataModel::default(), None).is_empty());
}
