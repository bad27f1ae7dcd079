//! 优先队列模块
//!
//! 支持 decrease-key 的索引二叉最小堆。元素为 `0..capacity` 内的整数，
//! 每次交换同步维护元素到堆槽位的映射，因此成员判断为 O(1)，
//! 入堆、出堆和降键均为 O(log n)。
//!
//! 键相同时按元素编号排序，保证出堆顺序确定

/// 索引最小堆
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<K> {
    heap: Vec<usize>,
    position: Vec<Option<usize>>,
    keys: Vec<Option<K>>,
}

impl<K: Ord + Copy> IndexedMinHeap<K> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            position: vec![None; capacity],
            keys: vec![None; capacity],
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.position.len()
    }

    pub fn contains(&self, item: usize) -> bool {
        self.position.get(item).is_some_and(|p| p.is_some())
    }

    /// 元素当前的键，不在堆中时为 None
    pub fn key(&self, item: usize) -> Option<K> {
        if self.contains(item) {
            self.keys[item]
        } else {
            None
        }
    }

    /// 插入元素，元素越界或已在堆中时返回 false
    pub fn push(&mut self, item: usize, key: K) -> bool {
        if item >= self.capacity() || self.contains(item) {
            return false;
        }
        self.keys[item] = Some(key);
        self.position[item] = Some(self.heap.len());
        self.heap.push(item);
        self.sift_up(self.heap.len() - 1);
        true
    }

    pub fn peek(&self) -> Option<(usize, K)> {
        let item = *self.heap.first()?;
        self.keys[item].map(|key| (item, key))
    }

    /// 弹出键最小的元素
    pub fn pop(&mut self) -> Option<(usize, K)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let item = self.heap.pop()?;
        self.position[item] = None;
        let key = self.keys[item].take()?;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((item, key))
    }

    /// 降低元素的键并修复堆，新键不更小时不做修改并返回 false
    pub fn decrease_key(&mut self, item: usize, key: K) -> bool {
        let Some(slot) = self.position.get(item).copied().flatten() else {
            return false;
        };
        match self.keys[item] {
            Some(current) if key < current => {
                self.keys[item] = Some(key);
                self.sift_up(slot);
                true
            }
            _ => false,
        }
    }

    fn less(&self, a: usize, b: usize) -> bool {
        let (ia, ib) = (self.heap[a], self.heap[b]);
        (self.keys[ia], ia) < (self.keys[ib], ib)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a]] = Some(a);
        self.position[self.heap[b]] = Some(b);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.less(slot, parent) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }
}
