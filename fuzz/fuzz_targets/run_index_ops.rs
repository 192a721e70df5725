#![no_main]
use std::collections::BTreeSet;

use libfuzzer_sys::fuzz_target;
use semidense::RunIndex;

fuzz_target!(|data: (Vec<u16>, u32)| {
    let (values, base) = data;
    // Leave headroom so base + 520 cannot overflow.
    let base = base.saturating_sub(u32::from(u16::MAX));

    let mut r = RunIndex::new();
    let mut model = BTreeSet::new();
    for v in values {
        // clustered so runs form and merge
        let v = base + u32::from(v % 512);
        assert_eq!(r.insert(v), model.insert(v));
    }

    assert_eq!(r.len(), model.len() as u64);
    for w in r.runs().windows(2) {
        assert!(w[0].end() < u64::from(w[1].value()));
        assert_eq!(w[1].index(), w[0].index() + w[0].count());
    }

    for x in base..base + 520 {
        let below = model.range(..x).count() as u64;
        assert_eq!(r.index_of(x), below);
    }
});
