//! End-to-end segmentation scenarios

use cot_filter::{process, Config, EngineConfig, Strategy};

use super::helpers::{default_engine, fixtures_dir, load_fixture};

// ============================================================================
// Reference Scenarios
// ============================================================================

#[test]
fn scenario_marker_split() {
    let result = process("思索: 考虑用户情绪。最终言语: 你好呀！", &default_engine()).unwrap();

    assert_eq!(result.thought_text, "思索: 考虑用户情绪。");
    assert_eq!(result.speech_text, "你好呀！");
}

#[test]
fn scenario_tagged_block() {
    let result = process(
        "<内心独白>她想换个话题</内心独白>好的，我们继续。",
        &default_engine(),
    )
    .unwrap();

    assert_eq!(result.thought_text, "她想换个话题");
    assert_eq!(result.speech_text, "好的，我们继续。");
}

#[test]
fn scenario_redaction() {
    let mut config = Config::default();
    config.redaction.keywords = vec!["呃...".to_string(), "嗯...".to_string()];
    let engine = EngineConfig::from_config(&config).unwrap();

    let result = process("呃...我觉得嗯...可以", &engine).unwrap();
    assert_eq!(result.speech_text, "我觉得可以");
}

#[test]
fn scenario_empty_input() {
    assert!(process("", &default_engine()).is_none());
}

#[test]
fn scenario_unterminated_tag() {
    let result = process("<内心独白>leftover text", &default_engine()).unwrap();

    assert_eq!(result.thought_text, "");
    assert_eq!(result.speech_text, "<内心独白>leftover text");
    assert_eq!(result.strategy, Strategy::Passthrough);
}

// ============================================================================
// Fixtures
// ============================================================================

#[test]
fn multi_line_tagged_fixture() {
    let raw = load_fixture("tagged_reply.txt");
    let result = process(&raw, &default_engine()).unwrap();

    assert_eq!(
        result.thought_text,
        "他又在试探我的底线。\n不能表现出动摇。\n他的语气比昨天更急。"
    );
    assert_eq!(result.speech_text, "你说得对，我们明天再谈吧。");
}

#[test]
fn marker_fixture_keeps_tags_raw_in_thought() {
    let raw = load_fixture("marker_reply.txt");
    let result = process(&raw, &default_engine()).unwrap();

    assert_eq!(result.strategy, Strategy::Marker);
    assert_eq!(
        result.thought_text,
        "<意识流动>窗外在下雨。</意识流动>\n思索：要不要告诉他真相？"
    );
    // Only the first marker splits
    assert_eq!(result.speech_text, "雨停之前，留下来喝杯茶吧。最终言语不会改变。");
}

#[test]
fn english_persona_from_config_file() {
    let config = Config::load_from(&fixtures_dir().join("english_persona.toml")).unwrap();
    let engine = EngineConfig::from_config(&config).unwrap();

    let result = process(
        "<think>User is upset.</think>um, I hear you. Thought: maybe offer tea\nlater",
        &engine,
    )
    .unwrap();

    assert_eq!(result.thought_text, "User is upset.\nThought: maybe offer tea\nlater");
    assert_eq!(result.speech_text, "I hear you.");

    let result = process("Reasoning here.\nfinal answer: 42", &engine).unwrap();
    assert_eq!(result.thought_text, "Reasoning here.");
    assert_eq!(result.speech_text, "42");
}

// ============================================================================
// Properties
// ============================================================================

const SAMPLES: &[&str] = &[
    "早上好。",
    "<内心独白>甲</内心独白>乙",
    "<无声的观察>一</无声的观察>二<意识流动>三</意识流动>四",
    "<内心独白>缺少结尾",
    "<内心独白>错配</意识流动>",
    "回复。思索：还有话没说\n第二行",
    "最终言语：只有回复",
    "前面的想法 罗莎的最终言语: 回复 最终言语: 依旧是回复",
    "嗯...那个...卧槽，这个嘛...好吧",
];

#[test]
fn nothing_matched_means_trimmed_speech() {
    let engine = default_engine();
    for raw in ["  hello  ", "\n今天很好\n", "<other>x</other>"] {
        let result = process(raw, &engine).unwrap();
        assert_eq!(result.thought_text, "");
        assert_eq!(result.speech_text, raw.trim());
    }
}

#[test]
fn speech_never_contains_tag_blocks() {
    let engine = default_engine();
    for raw in SAMPLES {
        let result = process(raw, &engine).unwrap();
        if result.strategy == Strategy::Marker {
            continue;
        }
        for block in engine.tags().find_blocks(raw) {
            assert!(
                !result.speech_text.contains(&raw[block.span.clone()]),
                "block leaked into speech for {:?}",
                raw
            );
            assert!(result.thought_text.contains(block.content.trim()));
        }
    }
}

#[test]
fn speech_never_contains_redacted_keywords() {
    let engine = default_engine();
    for raw in SAMPLES {
        let result = process(raw, &engine).unwrap();
        for keyword in engine.redaction().keywords() {
            assert!(!result.speech_text.contains(keyword.as_str()));
        }
        assert_eq!(engine.redaction().apply(&result.speech_text), result.speech_text);
    }
}

#[test]
fn marker_parts_never_equal_marker() {
    let engine = default_engine();
    let result = process("想法。最终言语：回复。", &engine).unwrap();

    assert_eq!(result.thought_text, "想法。");
    assert_eq!(result.speech_text, "回复。");
    assert_ne!(result.thought_text, "最终言语：");
    assert_ne!(result.speech_text, "最终言语：");
}
