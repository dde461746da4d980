#![no_main]
use full_name_parser::{parse, NameOrder, ParseError, ParserConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    for order in [NameOrder::FirstLast, NameOrder::LastFirst] {
        let config = ParserConfig::default().with_order(order);
        match parse(data, &config) {
            Ok(name) => {
                let _ = name.full_name();
                let _ = name.display_name();
            }
            Err(ParseError::EmptyInput) => assert!(data.trim().is_empty()),
            Err(ParseError::TooLong { .. }) => assert!(data.chars().count() > config.max_length),
            Err(err) => panic!("unexpected error {}", err),
        }
    }
});
