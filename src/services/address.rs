//! 地址提取 - 业务能力层
//!
//! 纯函数：同样的页面内容永远得到同样的地址字符串

use crate::error::StructureError;
use crate::models::PostalAddress;
use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;

/// 投票站详情页中包含地址的容器 id
pub const CONTAINER_ID: &str = "divPollingPlace";

static CONTAINER: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(&format!("#{CONTAINER_ID}")).expect("静态选择器")
});
static PARAGRAPH: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("静态选择器"));
static LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").expect("静态选择器"));

static ADDRESS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([^,]+?)\s*,\s*([^,]+?)\s*,\s*([A-Za-z]{2})\s+(\d{5}(?:-\d{4})?)\s*$")
        .expect("静态正则")
});

/// 从投票站详情页提取地址
///
/// 路径固定：`#divPollingPlace` → 第一个 `<p>` → 第一个 `<a>`。
/// 链接内每个文本片段去掉首尾空白、丢弃空片段后以 ", " 连接。
pub fn extract_address(html: &str) -> Result<String, StructureError> {
    let document = Html::parse_document(html);

    let container = document
        .select(&CONTAINER)
        .next()
        .ok_or(StructureError::MissingContainer {
            container_id: CONTAINER_ID,
        })?;
    let paragraph = container
        .select(&PARAGRAPH)
        .next()
        .ok_or(StructureError::MissingParagraph)?;
    let link = paragraph
        .select(&LINK)
        .next()
        .ok_or(StructureError::MissingLink)?;

    let fragments: Vec<&str> = link
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    Ok(fragments.join(", "))
}

/// 把 `street, city, ST 12345` 形式的地址拆成各部分，格式不符返回 None
pub fn parse_address(address: &str) -> Option<PostalAddress> {
    let caps = ADDRESS_PATTERN.captures(address)?;
    Some(PostalAddress {
        street: caps[1].to_string(),
        city: caps[2].to_string(),
        state: caps[3].to_uppercase(),
        zip: caps[4].to_string(),
    })
}

/// 地址校验：非空且能拆分
pub fn validate_address(address: &str) -> Result<(), StructureError> {
    if address.trim().is_empty() {
        return Err(StructureError::EmptyAddress);
    }
    if parse_address(address).is_none() {
        return Err(StructureError::UnparseableAddress {
            address: address.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAIL_PAGE: &str = r#"
        <html><body>
          <div id="header"><p><a href="/">Home</a></p></div>
          <div id="divPollingPlace">
            <h3>Oak Grove Fire Station</h3>
            <p>
              <a href="https://maps.google.com/?q=123+Main+St">
                123 Main St<br/>
                Oak Grove, NC 27565
              </a>
              <a href="/other">Directions</a>
            </p>
            <p><a href="/ignored">Second paragraph</a></p>
          </div>
        </body></html>
    "#;

    #[test]
    fn test_extract_joins_trimmed_fragments() {
        assert_eq!(
            extract_address(DETAIL_PAGE).unwrap(),
            "123 Main St, Oak Grove, NC 27565"
        );
    }

    #[test]
    fn test_extract_is_deterministic() {
        let first = extract_address(DETAIL_PAGE).unwrap();
        let second = extract_address(DETAIL_PAGE).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_extract_includes_nested_text() {
        let html = r#"<div id="divPollingPlace"><p><a>
            <span>500 Elm Ave</span><br><span> Suite 2 </span><br>Raleigh, NC 27601</a></p></div>"#;
        assert_eq!(
            extract_address(html).unwrap(),
            "500 Elm Ave, Suite 2, Raleigh, NC 27601"
        );
    }

    #[test]
    fn test_paragraph_found_at_any_depth() {
        let html = r#"<div id="divPollingPlace"><section><p>Location:
            <b><a>9 Oak Rd<br>Cary, NC 27511</a></b></p></section></div>"#;
        assert_eq!(extract_address(html).unwrap(), "9 Oak Rd, Cary, NC 27511");
    }

    #[test]
    fn test_container_located_by_id_constant() {
        let html = format!(r#"<div id="{CONTAINER_ID}"><p><a>7 Pine St<br>Apex, NC 27502</a></p></div>"#);
        assert_eq!(extract_address(&html).unwrap(), "7 Pine St, Apex, NC 27502");

        let other = r#"<div id="divPollingPlaceOld"><p><a>7 Pine St</a></p></div>"#;
        assert!(matches!(
            extract_address(other),
            Err(StructureError::MissingContainer { .. })
        ));
    }

    #[test]
    fn test_missing_container() {
        let html = "<html><body><p><a>1 Main St</a></p></body></html>";
        assert_eq!(
            extract_address(html).unwrap_err(),
            StructureError::MissingContainer {
                container_id: CONTAINER_ID
            }
        );
    }

    #[test]
    fn test_missing_paragraph() {
        let html = r#"<div id="divPollingPlace"><a>1 Main St</a></div>"#;
        assert_eq!(
            extract_address(html).unwrap_err(),
            StructureError::MissingParagraph
        );
    }

    #[test]
    fn test_missing_link() {
        let html = r#"<div id="divPollingPlace"><p>No link here</p><p><a>x</a></p></div>"#;
        assert_eq!(extract_address(html).unwrap_err(), StructureError::MissingLink);
    }

    #[test]
    fn test_empty_link_passes_through() {
        let html = r#"<div id="divPollingPlace"><p><a>   </a></p></div>"#;
        assert_eq!(extract_address(html).unwrap(), "");
    }

    #[test]
    fn test_parse_address() {
        let parsed = parse_address("123 Main St, Oak Grove, NC 27565").unwrap();
        assert_eq!(parsed.street, "123 Main St");
        assert_eq!(parsed.city, "Oak Grove");
        assert_eq!(parsed.state, "NC");
        assert_eq!(parsed.zip, "27565");

        let plus_four = parse_address("1 Elm Rd,Cary, nc 27511-1234").unwrap();
        assert_eq!(plus_four.city, "Cary");
        assert_eq!(plus_four.state, "NC");
        assert_eq!(plus_four.zip, "27511-1234");
    }

    #[test]
    fn test_parse_address_rejects_other_shapes() {
        assert!(parse_address("").is_none());
        assert!(parse_address("Oak Grove Fire Station").is_none());
        assert!(parse_address("123 Main St, Oak Grove, North Carolina").is_none());
        assert!(parse_address("123 Main St, Suite 4, Oak Grove, NC 27565").is_none());
    }

    #[test]
    fn test_validate_address() {
        assert!(validate_address("123 Main St, Oak Grove, NC 27565").is_ok());
        assert_eq!(validate_address("  "), Err(StructureError::EmptyAddress));
        assert_eq!(
            validate_address("somewhere"),
            Err(StructureError::UnparseableAddress {
                address: "somewhere".to_string()
            })
        );
    }
}
