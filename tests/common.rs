/// Reference output of one generator: raw words then reals, as printed by the reference test program
#[allow(dead_code)]
pub struct Fixture {
    pub words: Vec<String>,
    pub reals: Vec<String>,
}

// read a reference output file, splitting the two blank-line separated sections into tokens
#[allow(dead_code)]
pub fn read_fixture(path: &str) -> Fixture {
    use std::fs::File;
    use std::io::{BufRead, BufReader};

    let file = File::open(path).unwrap();

    let mut sections: Vec<Vec<String>> = vec![Vec::new()];

    for line in BufReader::new(file).lines() {
        let line = line.unwrap();

        if line.trim().is_empty() {
            sections.push(Vec::new());
        } else if !line.contains("outputs of") {
            let section = sections.last_mut().unwrap();
            section.extend(line.split_whitespace().map(String::from));
        }
    }

    assert_eq!(sections.len(), 2, "expected a word section and a real section");

    let reals = sections.pop().unwrap();
    let words = sections.pop().unwrap();

    Fixture { words, reals }
}

#[allow(dead_code)]
pub fn to_hex(hex: &[u8]) -> String {
    hex.iter().map(|x| format!("{:02x}", x)).collect()
}
