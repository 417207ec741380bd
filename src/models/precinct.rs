//! 选区描述
//!
//! 选区列表接口返回的每一项都在这里反序列化成强类型记录，
//! 缺字段或类型不对直接报解析错误。

use serde::{Deserialize, Deserializer};
use std::fmt::Display;

/// "未选择选区" 占位项的描述文本，永远不输出
pub const PLACEHOLDER_DESCRIPTION: &str = "<Select a Precinct>";

/// 选区描述
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PrecinctDescriptor {
    #[serde(rename = "CountyID")]
    pub county_id: u32,

    /// 县内唯一的选区代码
    #[serde(rename = "Label", default, deserialize_with = "null_as_empty")]
    pub precinct_label: String,

    #[serde(rename = "Description")]
    pub precinct_description: String,

    #[serde(rename = "PollingPlaceID")]
    pub polling_place_id: u32,

    #[serde(rename = "PollingPlaceName", default, deserialize_with = "null_as_empty")]
    pub polling_place_name: String,
}

impl PrecinctDescriptor {
    /// 是否为占位项
    pub fn is_placeholder(&self) -> bool {
        self.precinct_description.trim() == PLACEHOLDER_DESCRIPTION
    }
}

impl Display for PrecinctDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[县 #{} 选区 {} 投票站 #{}]",
            self.county_id, self.precinct_label, self.polling_place_id
        )
    }
}

/// 解析选区列表接口的响应体
pub fn decode_precinct_list(body: &str) -> Result<Vec<PrecinctDescriptor>, serde_json::Error> {
    serde_json::from_str(body)
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
