//! End-to-end behaviour of gates and staged text sharing one viewport and clock,
//! the way a page mounts them.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use reveal_engine::{
    AnimateBy, GateConfig, ManualClock, ManualViewport, RevealConfig, RevealSchedule, SegmentPhase,
    StagedTextReveal, TextRevealConfig, VisibilityGate, VisibilityState, join_segments, segment_text,
};

/// Every string up to `max_len` characters over a small alphabet that mixes
/// word characters, several kinds of whitespace and multi-byte chars.
fn all_strings(max_len: usize) -> Vec<String> {
    const ALPHABET: &[char] = &['a', 'é', ' ', '\t', '\n', '🎧'];
    let mut out = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        let mut next = Vec::new();
        for prefix in &frontier {
            for ch in ALPHABET {
                let mut s = prefix.clone();
                s.push(*ch);
                next.push(s);
            }
        }
        out.extend(next.iter().cloned());
        frontier = next;
    }
    out
}

#[test]
fn segmentation_properties_hold_for_all_short_strings() {
    for s in all_strings(4) {
        let words = segment_text(&s, AnimateBy::Words);
        assert_eq!(join_segments(&words), s, "words round-trip for {s:?}");

        let letters = segment_text(&s, AnimateBy::Letters);
        assert_eq!(letters.len(), s.chars().count(), "letter count for {s:?}");
        assert!(letters.iter().all(|seg| seg.text.chars().count() == 1));

        let schedule = RevealSchedule::new(200, 0.35);
        let delays: Vec<f64> = (0..words.len()).map(|i| schedule.delay_ms(i)).collect();
        assert!(delays.windows(2).all(|w| w[0] <= w[1]));
    }
}

struct Page {
    viewport: ManualViewport,
    clock: ManualClock,
    log: Rc<RefCell<Vec<String>>>,
}

impl Page {
    fn new() -> Self {
        Self {
            viewport: ManualViewport::new(),
            clock: ManualClock::new(),
            log: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn text(&self, region: &str, config: TextRevealConfig) -> StagedTextReveal {
        let reveal = StagedTextReveal::new(config, Rc::new(self.clock.clone()));
        let log = self.log.clone();
        let name = region.to_string();
        let clock = self.clock.clone();
        reveal.on_complete(move || {
            log.borrow_mut()
                .push(format!("{name}@{}", clock.now().as_millis()))
        });
        reveal.mount(&self.viewport, Some(region));
        reveal
    }

    fn gate(&self, region: &str, threshold: f64) -> VisibilityGate {
        let gate = VisibilityGate::new(GateConfig::with_threshold(threshold));
        gate.mount(&self.viewport, Some(region));
        gate
    }
}

#[test]
fn page_scroll_reveals_blocks_in_order() {
    let page = Page::new();
    page.viewport.set_initial("hero", 1.0);

    let title = page.text("hero", TextRevealConfig::new("DIST"));
    let tagline = page.text(
        "tagline",
        TextRevealConfig {
            animate_by: AnimateBy::Letters,
            step_duration: 0.05,
            ..TextRevealConfig::new("Miami energy.")
        },
    );
    let cards = page.gate("cards", 0.2);
    let footer = page.gate("footer", 0.2);

    // hero was on screen at load and revealed during mount
    assert_eq!(title.state(), VisibilityState::Revealed);
    assert_eq!(tagline.state(), VisibilityState::Hidden);
    assert_eq!(page.viewport.active(), 3);

    page.clock.advance_ms(100);
    page.viewport.report("tagline", 0.4);
    page.viewport.report("cards", 0.1);
    assert!(!cards.is_revealed());

    page.clock.advance_ms(500);
    page.viewport.report("cards", 0.3);
    assert!(cards.is_revealed());
    assert!(!footer.is_revealed());
    assert_eq!(page.viewport.active(), 1);

    page.clock.advance_ms(5_000);
    // title: 200 + 1 * 350 from t=0; tagline: 200 + 13 * 50 from t=100
    assert_eq!(*page.log.borrow(), vec!["hero@550".to_string(), "tagline@950".to_string()]);

    drop(footer);
    assert_eq!(page.viewport.active(), 0);
}

#[test]
fn scrolling_back_and_forth_never_hides_or_repeats() {
    let page = Page::new();
    let gate = page.gate("block", 0.2);
    let text = page.text("block", TextRevealConfig::new("bass is a feeling"));
    let reveals = Rc::new(Cell::new(0));
    let counter = reveals.clone();
    gate.on_reveal(move || counter.set(counter.get() + 1));

    for ratio in [0.5, 0.0, 0.9, 0.0, 1.0, 0.3] {
        page.viewport.report("block", ratio);
        page.clock.advance_ms(700);
        assert_eq!(gate.state(), VisibilityState::Revealed);
        assert_eq!(text.state(), VisibilityState::Revealed);
    }

    assert_eq!(reveals.get(), 1);
    assert_eq!(page.log.borrow().len(), 1);
    // Only the first report reached either sink.
    assert_eq!(page.viewport.delivered(), 2);
}

#[test]
fn unmounting_mid_page_leaves_no_live_callbacks() {
    let page = Page::new();
    let gates: Vec<VisibilityGate> = (0..4).map(|i| page.gate(&format!("g{i}"), 0.2)).collect();
    let texts: Vec<StagedTextReveal> = (0..4)
        .map(|i| page.text(&format!("t{i}"), TextRevealConfig::new("late night")))
        .collect();

    page.viewport.report("t0", 1.0);
    page.viewport.report("t1", 1.0);
    assert_eq!(page.clock.pending(), 2);

    drop(gates);
    drop(texts);

    assert_eq!(page.viewport.active(), 0);
    assert_eq!(page.clock.pending(), 0);
    for region in ["g0", "t2", "t3"] {
        assert_eq!(page.viewport.report(region, 1.0), 0);
    }
    page.clock.advance(Duration::from_secs(60));
    assert_eq!(page.clock.fired(), 0);
    assert!(page.log.borrow().is_empty());
}

#[test]
fn phases_evaluated_against_one_clock_match_completion() {
    let page = Page::new();
    let text = page.text("t", TextRevealConfig::new("hi there"));
    page.viewport.report("t", 1.0);

    let schedule = text.schedule();
    let segments = text.segments().clone();
    let completion = schedule.completion_delay(segments.len());

    // everything has started by the completion time
    assert_eq!(schedule.started_count(&segments, completion), 2);
    assert_eq!(schedule.phase_at(&segments[2], completion), SegmentPhase::Animating);

    page.clock.advance(completion);
    assert_eq!(*page.log.borrow(), vec!["t@1250".to_string()]);
}

#[test]
fn config_file_drives_instances() {
    let config = RevealConfig::from_toml_str(
        r#"
        [gate]
        threshold = 0.5

        [text]
        animate_by = "letters"
        delay_ms = 0
        step_duration = 0.1
        "#,
    )
    .expect("valid config");

    let page = Page::new();
    let gate = VisibilityGate::new(config.gate.clone());
    gate.mount(&page.viewport, Some("g"));
    page.viewport.report("g", 0.4);
    assert!(!gate.is_revealed());
    page.viewport.report("g", 0.5);
    assert!(gate.is_revealed());

    let text = page.text("t", config.text.with_text("abc"));
    assert_eq!(text.segments().len(), 3);
    page.viewport.report("t", 1.0);
    page.clock.advance_ms(300);
    assert_eq!(*page.log.borrow(), vec!["t@300".to_string()]);
}
