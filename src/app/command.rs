/// Side effects requested by the reducer and carried out by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ListEntries { seq: u64, filter: Option<String> },
    LoadEntry(String),
    EditEntry(String, String),
    RemoveEntry(String),
    LoadExecutableInfo,
    // Feed the debouncer; it emits `SetFilter` once typing settles
    QueueFilter(String),
}
