// SPDX-License-Identifier: MPL-2.0
//! Excel-compatible HTML serialization for table exports.
//!
//! Excel accepts an HTML document carrying the Office XML namespaces; the
//! portal exported tables this way rather than writing a real workbook. The
//! envelope is reproduced here with `quick-xml`, which also escapes cell text.

use super::table::DataTable;
use crate::error::Result;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// Serializes a table snapshot into the spreadsheet-compatible HTML envelope.
pub fn serialize(table: &DataTable) -> Result<String> {
    let mut writer = Writer::new(Vec::new());

    let mut html = BytesStart::new("html");
    html.push_attribute(("xmlns:o", "urn:schemas-microsoft-com:office:office"));
    html.push_attribute(("xmlns:x", "urn:schemas-microsoft-com:office:excel"));
    html.push_attribute(("xmlns", "http://www.w3.org/TR/REC-html40"));
    writer.write_event(Event::Start(html))?;

    writer.write_event(Event::Start(BytesStart::new("head")))?;
    let mut meta = BytesStart::new("meta");
    meta.push_attribute(("charset", "UTF-8"));
    writer.write_event(Event::Empty(meta))?;
    writer.write_event(Event::End(BytesEnd::new("head")))?;

    writer.write_event(Event::Start(BytesStart::new("body")))?;
    write_table(&mut writer, table)?;
    writer.write_event(Event::End(BytesEnd::new("body")))?;

    writer.write_event(Event::End(BytesEnd::new("html")))?;

    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

fn write_table(writer: &mut Writer<Vec<u8>>, table: &DataTable) -> Result<()> {
    let mut element = BytesStart::new("table");
    element.push_attribute(("id", table.id.as_str()));
    writer.write_event(Event::Start(element))?;

    if !table.headers.is_empty() {
        write_row(writer, "th", &table.headers)?;
    }
    for row in &table.rows {
        write_row(writer, "td", row)?;
    }

    writer.write_event(Event::End(BytesEnd::new("table")))?;
    Ok(())
}

fn write_row(writer: &mut Writer<Vec<u8>>, cell_tag: &str, cells: &[String]) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("tr")))?;
    for cell in cells {
        writer.write_event(Event::Start(BytesStart::new(cell_tag)))?;
        writer.write_event(Event::Text(BytesText::new(cell)))?;
        writer.write_event(Event::End(BytesEnd::new(cell_tag)))?;
    }
    writer.write_event(Event::End(BytesEnd::new("tr")))?;
    Ok(())
}
