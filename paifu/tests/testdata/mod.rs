pub struct TestCase {
    pub desc: &'static str,
    pub data: &'static str,
}

pub const TESTDATA: &[TestCase] = &[
    TestCase {
        desc: "tsumo_and_ron",
        data: include_str!("tsumo_and_ron.json"),
    },
    TestCase {
        desc: "double_ron",
        data: include_str!("double_ron.json"),
    },
    TestCase {
        desc: "draws",
        data: include_str!("draws.json"),
    },
    TestCase {
        desc: "missing_fields",
        data: include_str!("missing_fields.json"),
    },
];

#[allow(dead_code)]
pub fn case(desc: &str) -> &'static str {
    TESTDATA
        .iter()
        .find(|case| case.desc == desc)
        .map(|case| case.data)
        .unwrap_or_else(|| panic!("no test case named {desc}"))
}
