/// 拆分后的邮寄地址：`street, city, ST 12345`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalAddress {
    pub street: String,
    pub city: String,
    /// 两位州代码
    pub state: String,
    /// 五位邮编，可能带 `-1234` 扩展
    pub zip: String,
}
