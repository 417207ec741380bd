use crate::models::precinct::PrecinctDescriptor;

/// 选区与投票站地址的连接结果，即输出文件中的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRecord {
    pub county_id: u32,
    pub precinct_label: String,
    pub precinct_description: String,
    pub polling_place_name: String,
    pub polling_place_address: String,
}

impl ResolvedRecord {
    /// 由选区描述和解析出的地址组成一条记录
    pub fn new(descriptor: PrecinctDescriptor, polling_place_address: String) -> Self {
        Self {
            county_id: descriptor.county_id,
            precinct_label: descriptor.precinct_label,
            precinct_description: descriptor.precinct_description,
            polling_place_name: descriptor.polling_place_name,
            polling_place_address,
        }
    }

    /// 按固定列顺序输出：county_id, precinct_label, precinct_description,
    /// polling_place_name, polling_place_address
    pub fn to_row(&self) -> [String; 5] {
        [
            self.county_id.to_string(),
            self.precinct_label.clone(),
            self.precinct_description.clone(),
            self.polling_place_name.clone(),
            self.polling_place_address.clone(),
        ]
    }
}
