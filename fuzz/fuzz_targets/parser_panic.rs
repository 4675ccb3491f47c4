#![no_main]
use libfuzzer_sys::fuzz_target;
use texlog::{indent_line, LogParser, ParserConfig};

fuzz_target!(|data: &[u8]| {
    // Logs are not guaranteed to be UTF-8; read them the way the CLI does.
    let text = String::from_utf8_lossy(data);

    let _ = LogParser::new().parse(&text);

    // A tight window and zero tolerance stress the slicing at the end of input.
    let config = ParserConfig::default()
        .with_lookahead_lines(1)
        .with_error_blank_tolerance(0)
        .with_package_error_blank_tolerance(0);
    LogParser::with_config(config).parse_with_echo(&text, |depth, line| {
        let _ = indent_line(depth, line);
    });
});
