use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use wave_lexer::lex;
use wave_syntax::{FileId, TokenKind};

fn any_wave_like() -> impl Strategy<Value = String> {
    let ascii =
        proptest::collection::vec(any::<char>().prop_filter("ascii", |c| c.is_ascii()), 0..60)
            .prop_map(|v| v.into_iter().collect::<String>());
    let unicode = proptest::collection::vec(
        any::<char>().prop_filter("non-ascii", |c| !c.is_ascii()),
        0..20,
    )
    .prop_map(|v| v.into_iter().collect::<String>());
    let sym = "x :: 0x1.2p2 0b12 'c' '\\x4 \"str \"\"\"ml\"\"\" /* /* */ */ // |> >>= ... :: := @ $ struct enum import foreign when \r\n"
        .to_string();
    (ascii, unicode, any::<bool>(), any::<bool>()).prop_map(move |(a, u, f1, f2)| {
        let mut s = String::new();
        if f1 {
            s.push_str(&sym);
        }
        s.push_str(&a);
        s.push_str(&u);
        if f2 {
            s.push_str(&sym);
        }
        s.chars().take(240).collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32, max_shrink_iters: 200, .. ProptestConfig::default()
    })]
    #[test]
    fn lex_random_input_should_not_panic(s in any_wave_like()) {
        let lexed = lex(FileId(0), &s);
        // Stream invariants: terminated, anchored at the end, monotone.
        prop_assert!(!lexed.kinds.is_empty());
        prop_assert_eq!(lexed.kinds.last().copied(), Some(TokenKind::Eof));
        prop_assert_eq!(lexed.starts.last().copied(), Some(s.len() as u32));
        for pair in lexed.starts.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
    }
}
