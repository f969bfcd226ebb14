use ssn_core::{
    decode, encode, HitSource, NavigationEngine, SearchConfig, Viewport, WindowEntry, MAX_INDEX,
};

fn engine(seed: u64) -> NavigationEngine {
    NavigationEngine::with_seed(SearchConfig::default(), seed)
}

fn at_current(engine: &NavigationEngine) -> Viewport {
    Viewport::at(engine.current_hit().unwrap().index).unwrap()
}

#[test]
fn test_codec_endpoints() {
    assert_eq!(encode(0).unwrap().to_string(), "001-01-0001");
    assert_eq!(decode("001-01-0001").unwrap(), 0);
    assert_eq!(encode(MAX_INDEX - 1).unwrap().to_string(), "899-99-9999");
}

#[test]
fn test_search_synthesizes_when_nothing_is_near() {
    let engine = engine(99);
    let viewport = Viewport::at(100).unwrap();

    let found = engine.search("999", &viewport).unwrap();
    let hit = engine.current_hit().unwrap();

    assert!(found.to_string().contains("999"));
    assert_eq!(hit.source, HitSource::RandomSearch);
    assert!(hit.index > 100);
    assert_eq!(decode(&found.to_string()).unwrap(), hit.index);
}

#[test]
fn test_search_never_yields_forbidden_area() {
    for seed in 0..5 {
        let engine = engine(seed);
        let found = engine.search("666", &Viewport::at(0).unwrap()).unwrap();
        assert_ne!(found.area(), 666);
        assert!(found.to_string().contains("666"));
    }
}

#[test]
fn test_next_moves_forward() {
    let engine = engine(7);
    engine.search("42-7", &Viewport::at(0).unwrap()).unwrap();

    for _ in 0..10 {
        let viewport = at_current(&engine);
        let found = engine.next(&viewport).unwrap();
        let hit = engine.current_hit().unwrap();

        assert!(found.to_string().contains("42-7"));
        if hit.source != HitSource::Fallback {
            let position = viewport.position();
            assert!(hit.index > position, "{} is not after {}", hit.index, position);
        }
    }
    assert_eq!(engine.history().len(), 11);
}

#[test]
fn test_previous_moves_backward_once_history_is_spent() {
    let engine = engine(8);
    engine.search("42-7", &Viewport::at(MAX_INDEX / 2).unwrap()).unwrap();
    let viewport = at_current(&engine);
    engine.next(&viewport).unwrap();

    // Replays the search result
    let first = engine.history()[0].identifier;
    assert_eq!(engine.previous(&at_current(&engine)), Some(first));

    for _ in 0..5 {
        let viewport = at_current(&engine);
        engine.previous(&viewport).unwrap();
        let hit = engine.current_hit().unwrap();

        assert_eq!(engine.history().len(), 1);
        if hit.source != HitSource::Fallback {
            let position = viewport.position();
            assert!(hit.index < position, "{} is not before {}", hit.index, position);
        }
    }
}

#[test]
fn test_search_at_end_of_list_does_not_wrap_silently() {
    let engine = engine(4);
    let start = MAX_INDEX - 3;
    let displayed = (0..5).map(|i| WindowEntry::wrapping(i128::from(start) + i)).collect();
    let viewport = Viewport::new(start, displayed).unwrap();

    // Every "001-01-000?" row lies before the position; the wrapped rows on
    // screen must not be reported as an ordinary forward match
    let found = engine.search("001-01-000", &viewport).unwrap();
    let hit = engine.current_hit().unwrap();
    assert!(found.to_string().starts_with("001-01-000"));
    assert!(hit.index < start);
    assert_eq!(hit.source, HitSource::Fallback);
}

#[test]
fn test_previous_after_two_nexts_returns_first_next() {
    let engine = engine(21);
    engine.search("31-4", &Viewport::at(5_000).unwrap()).unwrap();

    let first_next = engine.next(&at_current(&engine)).unwrap();
    engine.next(&at_current(&engine)).unwrap();

    assert_eq!(engine.previous(&at_current(&engine)), Some(first_next));
}

#[test]
fn test_unalignable_query_finds_nothing() {
    let engine = engine(3);
    assert_eq!(engine.search("12345", &Viewport::at(0).unwrap()), None);
    assert!(!engine.is_searching());
}
