use gridpath_core::Status;

/// Per-cell search record.
///
/// `status` is set by the caller between searches. The remaining fields are
/// transient: every search resets them to `g = h = f = 0` and no parent
/// before it starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub(crate) index: usize,
    pub(crate) status: Status,
    pub(crate) g: u32,
    pub(crate) h: u32,
    pub(crate) f: u32,
    pub(crate) parent: Option<usize>,
}

impl Node {
    pub(crate) fn new(index: usize) -> Self {
        Self {
            index,
            status: Status::Open,
            g: 0,
            h: 0,
            f: 0,
            parent: None,
        }
    }

    #[inline]
    pub(crate) fn reset(&mut self) {
        self.g = 0;
        self.h = 0;
        self.f = 0;
        self.parent = None;
    }

    /// Cell index of this node.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Current cell status.
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Best known cost from the start of the last search.
    #[inline]
    pub fn g(&self) -> u32 {
        self.g
    }

    /// Manhattan estimate to the end of the last search.
    #[inline]
    pub fn h(&self) -> u32 {
        self.h
    }

    /// Search priority, `g + h`.
    #[inline]
    pub fn f(&self) -> u32 {
        self.f
    }

    /// Predecessor on the best known path, `None` for the start and for
    /// cells the last search never reached.
    #[inline]
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }
}
