#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{Cursor, Read};
use zip::ZipArchive;

/// First worksheet of an xlsx package, read back into cell text.
pub struct Worksheet {
    pub name: String,
    cells: HashMap<String, String>,
    styles: HashMap<String, String>,
    pub stylesheet: String,
}

impl Worksheet {
    pub fn read(bytes: &[u8]) -> Self {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let workbook = read_part(&mut archive, "xl/workbook.xml");
        let shared = read_part(&mut archive, "xl/sharedStrings.xml");
        let sheet = read_part(&mut archive, "xl/worksheets/sheet1.xml");
        let stylesheet = read_part(&mut archive, "xl/styles.xml");

        let sheet_tag = workbook.split("<sheet ").nth(1).unwrap();
        let name = attr(sheet_tag.split("/>").next().unwrap(), "name").unwrap();

        let strings: Vec<String> = shared
            .split("<si>")
            .skip(1)
            .map(|si| {
                let t = &si[si.find("<t").unwrap()..];
                let start = t.find('>').unwrap() + 1;
                t[start..t.find("</t>").unwrap()].to_string()
            })
            .collect();

        let mut cells = HashMap::new();
        let mut styles = HashMap::new();
        for chunk in sheet.split("<c ").skip(1) {
            let head_end = chunk.find('>').unwrap();
            let head = &chunk[..head_end];
            let reference = attr(head, "r").unwrap();
            if let Some(style) = attr(head, "s") {
                styles.insert(reference.clone(), style);
            }
            if head.ends_with('/') {
                continue;
            }

            let body = &chunk[head_end + 1..chunk.find("</c>").unwrap()];
            let Some(start) = body.find("<v>") else { continue };
            let raw = &body[start + 3..body.find("</v>").unwrap()];
            let value = if head.contains("t=\"s\"") {
                strings[raw.parse::<usize>().unwrap()].clone()
            } else {
                raw.to_string()
            };
            cells.insert(reference, value);
        }

        Worksheet {
            name,
            cells,
            styles,
            stylesheet,
        }
    }

    pub fn cell(&self, reference: &str) -> Option<&str> {
        self.cells.get(reference).map(String::as_str)
    }

    pub fn number(&self, reference: &str) -> f64 {
        self.cell(reference).unwrap().parse().unwrap()
    }

    pub fn style(&self, reference: &str) -> Option<&str> {
        self.styles.get(reference).map(String::as_str)
    }

    pub fn row(&self, row: u32) -> Vec<Option<&str>> {
        ["A", "B", "C", "D", "E", "F"]
            .iter()
            .map(|col| self.cell(&format!("{}{}", col, row)))
            .collect()
    }
}

fn read_part<R: Read + std::io::Seek>(archive: &mut ZipArchive<R>, name: &str) -> String {
    let mut text = String::new();
    archive.by_name(name).unwrap().read_to_string(&mut text).unwrap();
    text
}

fn attr(tag: &str, name: &str) -> Option<String> {
    let needle = format!(" {}=\"", name);
    let padded = format!(" {}", tag);
    let start = padded.find(&needle)? + needle.len();
    let end = padded[start..].find('"')? + start;
    Some(padded[start..end].to_string())
}
