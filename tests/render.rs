use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use temptree::temptree;
use wikicourselib::core::{Course, GlobalRenderConfig, LineEnding, RenderConfig};
use wikicourselib::{render_course, ConfigError, Engine, RenderError};

const TEMPLATES: &str = r#"
[templates]
course = "course details"
table = "students table"
table_row = "students table row"
timeline = "start of course timeline"
start_of_week = "start of course week"
end_of_week = "end of course week"
"#;

const COURSE: &str = r#"{
    "title": "Intro to X",
    "subject": "Biology",
    "start": "2016-01-11",
    "end": "2016-04-29",
    "school": "Example University",
    "expected_students": 2,
    "slug": "Example_University/Intro_to_X",
    "language": "en",
    "platform": "dashboard.wikiedu.org",
    "description": "Students *write* articles.",
    "instructors": [ { "username": "alice", "real_name": "Alice Example" } ],
    "nonstudents": [ { "username": "greta", "real_name": "Greta", "greeter": true } ],
    "students": [
        { "username": "sam", "assignments": [
            { "article_title": "Cell_biology", "role": "assigned" },
            { "article_title": "Mitosis", "role": "reviewing" }
        ] },
        { "username": "ann" }
    ],
    "meetings": {
        "timeline_start": "2016-01-11",
        "timeline_end": "2016-04-29",
        "weekdays": "0101000",
        "day_exceptions": ["2016-01-20"]
    },
    "weeks": [
        { "id": 7, "blocks": [
            { "kind": 1, "title": "Pick an article", "order": 2, "content": "<p>Choose <strong>one</strong>.</p>" },
            { "kind": 0, "title": "Welcome", "order": 1 }
        ] },
        { "id": 3, "blocks": [
            { "kind": 2, "title": "Draft due", "order": 1 }
        ] }
    ]
}"#;

fn setup() {
    static HOOKED: once_cell::sync::OnceCell<()> = once_cell::sync::OnceCell::new();
    HOOKED.get_or_init(|| {
        let (_, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
        eyre_hook.install().unwrap();
    });
}

fn render_config(tree: &TempDir, line_ending: LineEnding) -> GlobalRenderConfig {
    Arc::new(RenderConfig {
        dashboard_url: "dashboard.wikiedu.org".into(),
        course_prefix: "Wikipedia:Wiki_Ed".into(),
        template_dir: tree.path().join("templates"),
        line_ending,
    })
}

fn load_course<P: AsRef<Path>>(path: P) -> Course {
    let raw = std::fs::read_to_string(path.as_ref()).unwrap();
    serde_json::from_str(&raw).expect("failed to parse course record")
}

#[test]
fn renders_full_course() {
    setup();
    let tree = temptree! {
        templates: {
            "dashboard.wikiedu.org_en.toml": TEMPLATES,
        },
        "course.json": COURSE,
    };

    let course = load_course(tree.path().join("course.json"));
    let rendered = render_course(render_config(&tree, LineEnding::Lf), &course).unwrap();

    let expected = "\
{{course details
 | course_name = Intro to X
 | instructor_username = alice
 | instructor_realname = Alice Example
 | support_staff = greta
 | subject = Biology
 | start_date = 2016-01-11
 | end_date = 2016-04-29
 | institution = Example University
 | expected_students = 2
 | assignment_page = Wikipedia:Wiki_Ed/Example_University/Intro_to_X
 | dashboard.wikiedu.org = yes
}}
Students ''write'' articles.
{{students table}}
{{students table row|sam|[[Cell biology]]|[[Mitosis]]}}
{{students table row|ann||}}
{{end of students table}}
{{start of course timeline}}
=== Week 1 ===
{{start of course week|2016-01-11|2016-01-13}}
{{in class|In class - Welcome}}
{{assignment|Assignment - Pick an article}}
Choose '''one'''.
{{end of course week}}
=== Week 2 ===
{{start of course week|2016-01-18}}
{{assignment milestones|Draft due}}
{{end of course week}}
";
    assert_eq!(rendered, expected);
}

#[test]
fn carriage_returns_by_default() {
    setup();
    let tree = temptree! {
        templates: {
            "dashboard.wikiedu.org_en.toml": TEMPLATES,
        },
        "course.json": COURSE,
    };

    let course = load_course(tree.path().join("course.json"));
    let config = render_config(&tree, LineEnding::default());
    let rendered = Engine::new(config, &course)
        .unwrap()
        .render_default()
        .unwrap();

    assert!(rendered.contains("}}\rStudents ''write'' articles.\r{{students table}}\r"));
    assert!(rendered.ends_with("{{assignment milestones|Draft due}}\r{{end of course week}}\r"));
}

#[test]
fn multi_paragraph_text_keeps_one_line_ending() {
    setup();
    let tree = temptree! {
        templates: {
            "dashboard.wikiedu.org_en.toml": TEMPLATES,
        },
        "course.json": COURSE,
    };

    let mut course = load_course(tree.path().join("course.json"));
    course.description = "First paragraph.\n\nSecond paragraph.".into();
    course.weeks[0].blocks[0].content = "<p>Choose one.</p><p>Tell us why.</p>".into();

    let rendered = render_course(render_config(&tree, LineEnding::Cr), &course).unwrap();

    assert!(!rendered.contains('\n'));
    assert!(rendered.contains("}}\rFirst paragraph.\r\rSecond paragraph.\r{{students table}}\r"));
    assert!(rendered.contains(
        "{{assignment|Assignment - Pick an article}}\rChoose one.\r\rTell us why.\r{{end of course week}}\r"
    ));
}

#[test]
fn missing_template_file_aborts_before_rendering() {
    setup();
    let tree = temptree! {
        templates: {},
        "course.json": COURSE,
    };

    let course = load_course(tree.path().join("course.json"));
    let err = render_course(render_config(&tree, LineEnding::Cr), &course).unwrap_err();

    assert!(err
        .chain()
        .any(|cause| matches!(
            cause.downcast_ref::<ConfigError>(),
            Some(ConfigError::TemplateFileMissing { .. })
        )));
}

#[test]
fn unknown_block_kind_aborts_render() {
    setup();
    let tree = temptree! {
        templates: {
            "dashboard.wikiedu.org_en.toml": TEMPLATES,
        },
        "course.json": COURSE,
    };

    let mut course = load_course(tree.path().join("course.json"));
    course.weeks[1].blocks[0].kind = 5;
    let err = render_course(render_config(&tree, LineEnding::Cr), &course).unwrap_err();

    assert!(err.chain().any(|cause| matches!(
        cause.downcast_ref::<RenderError>(),
        Some(RenderError::UnknownBlockKind { kind: 5, .. })
    )));
}
