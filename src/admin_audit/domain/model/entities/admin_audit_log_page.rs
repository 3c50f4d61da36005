use crate::admin_audit::domain::model::entities::admin_audit_log_entry::AdminAuditLogEntry;

#[derive(Clone, Debug)]
pub struct AdminAuditLogPage {
    entries: Vec<AdminAuditLogEntry>,
    total: u64,
    page: u32,
    page_size: u32,
}

impl AdminAuditLogPage {
    pub fn new(entries: Vec<AdminAuditLogEntry>, total: u64, page: u32, page_size: u32) -> Self {
        Self {
            entries,
            total,
            page,
            page_size,
        }
    }

    pub fn entries(&self) -> &[AdminAuditLogEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<AdminAuditLogEntry> {
        self.entries
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.page_size))
    }
}
