/// Display settings a session needs, regardless of where they were loaded from.
pub trait ConfigProvider {
    fn precision(&self) -> Option<usize>;
    fn json_output(&self) -> bool;
}
