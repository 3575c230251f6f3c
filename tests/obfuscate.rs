use std::fs;

use jsveil::config::load_from_json;
use jsveil::writer::codec::decode_text;
use jsveil::{ObfuscateError, Obfuscator, RunState, obfuscate};

fn widget() -> String {
    fs::read_to_string("tests/fixtures/widget.js").unwrap()
}

/// Pull the encoded entries back out of `let b=['…',…];…`.
fn prelude_entries(prelude: &str) -> Vec<String> {
    let start = prelude.find('[').expect("table initializer") + 1;
    let end = prelude.find(']').expect("table initializer end");
    prelude[start..end]
        .split(',')
        .filter(|e| !e.is_empty())
        .map(|e| decode_text(e.trim_matches('\'')).expect("entry decodes"))
        .collect()
}

#[test]
fn obfuscates_fixture() {
    let mut state = RunState::default();
    let out = Obfuscator::default()
        .obfuscate_with(&widget(), &mut state)
        .expect("fixture obfuscates");

    assert_eq!(
        out.body,
        "const A=b[0];function B(C,D){let E=`${A}, ${C[b[1]]}!`;if(D>1){E=E+b[2]+D;}\n\
         window[b[3]][b[4]]=E;window[b[5]][b[6]](b[7],E);return E[b[8]](/!/g,b[9]);}\n\
         const F={};F[b[1]]=b[10];B(F,2);"
    );
    assert_eq!(
        state.literals.iter().collect::<Vec<_>>(),
        vec![
            "Hello", "name", " x", "document", "title", "console", "log", "render", "replace",
            "?", "Ada"
        ]
    );
    assert_eq!(state.identifiers.get("render"), Some("B"));
    assert_eq!(state.identifiers.get("person"), Some("F"));
}

#[test]
fn regex_with_slashes_survives() {
    let mut state = RunState::default();
    let out = Obfuscator::default()
        .obfuscate_with(r"console.log('a//b'.replace(/\/\//g, '-')) // done", &mut state)
        .unwrap();
    assert_eq!(out.body, r"window[b[0]][b[1]](b[2][b[3]](/\/\//g,b[4]))");
    assert_eq!(state.literals.get(2), Some("a//b"));
}

#[test]
fn prelude_round_trips_every_entry() {
    let mut state = RunState::default();
    let out = Obfuscator::default()
        .obfuscate_with(&widget(), &mut state)
        .unwrap();

    let decoded = prelude_entries(&out.prelude);
    let expected: Vec<String> = state.literals.iter().map(str::to_string).collect();
    assert_eq!(decoded, expected);
    assert!(out.prelude.starts_with("let b=["));
}

#[test]
fn program_hides_source_text() {
    let program = obfuscate(&widget()).unwrap();
    for leaked in ["greeting", "author", "Hello", "label", "//"] {
        assert!(!program.contains(leaked), "`{leaked}` leaked into output");
    }
}

#[test]
fn output_is_deterministic() {
    let src = widget();
    assert_eq!(obfuscate(&src).unwrap(), obfuscate(&src).unwrap());
}

#[test]
fn state_carries_across_runs() {
    let obfuscator = Obfuscator::default();
    let mut state = RunState::default();

    let first = obfuscator
        .obfuscate_with("let total = 'sum'; total;", &mut state)
        .unwrap();
    let second = obfuscator
        .obfuscate_with("let other = 'sum'; total + other;", &mut state)
        .unwrap();

    assert_eq!(first.body, "let A=b[0];A;");
    assert_eq!(second.body, "let B=b[0];A+B;");
    assert_eq!(state.literals.len(), 1);
}

#[test]
fn policy_marker_rejects_input() {
    let src = format!("{}\nconst run = eval;", widget());
    assert_eq!(
        obfuscate(&src),
        Err(ObfuscateError::PolicyViolation {
            marker: "eval".into()
        })
    );

    let mut state = RunState::default();
    assert!(
        Obfuscator::default()
            .obfuscate_with("x.evaluate()", &mut state)
            .is_err()
    );
    assert_eq!(state, RunState::default(), "no work done on rejection");
}

#[test]
fn custom_configuration_from_json() {
    let json = fs::read_to_string("tests/fixtures/config.json").unwrap();
    let config = load_from_json(&json).expect("valid config");
    let mut state = RunState::default();

    let out = Obfuscator::new(config)
        .obfuscate_with(&widget(), &mut state)
        .unwrap();

    assert!(out.prelude.starts_with("let _s=["));
    assert!(out.body.contains("globalThis[_s[3]][_s[4]]=E;"));
    assert!(out.body.starts_with("const A=_s[0];"));
}
