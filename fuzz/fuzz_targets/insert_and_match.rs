#![no_main]
use libfuzzer_sys::fuzz_target;
use routetree::{Config, MatchMode, Router};

fuzz_target!(|data: (Vec<(String, i32)>, String, bool)| {
    let match_mode = if data.2 {
        MatchMode::Capture
    } else {
        MatchMode::Literal
    };

    let mut router = Router::with_config(Config {
        match_mode,
        ..Config::default()
    });

    for (key, item) in data.0 {
        let _ = router.insert(key, item);
    }

    let _ = router.at(&data.1);
    router.dump(std::io::sink());
});
