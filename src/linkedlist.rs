use std::{fmt, marker::PhantomData, ptr::NonNull};
use tracing::trace;

/*
 * A single link of the chain. Each node exclusively owns its successor.
 */
struct Node<T> {
    value: T,
    next: Option<NonNull<Node<T>>>,
}

/*
 * FIFO singly linked list : push at the tail, peek and pop at the head.
 *
 * Nodes are leaked out of their box on push and boxed again on pop or drop.
 * <head> owns the whole chain, <tail> is a non-owning pointer to the last
 * node so that push stays O(1). Both are None exactly when <size> is 0.
 */
pub struct LinkedList<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    size: usize,
    _owns: PhantomData<Box<Node<T>>>,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList {
            head: None,
            tail: None,
            size: 0,
            _owns: PhantomData,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn len(&self) -> usize {
        self.size
    }

    /*
     * Append <value> after the current tail, always returns true.
     */
    pub fn push(&mut self, value: T) -> bool {
        let node = Box::new(Node { value, next: None });
        let node = NonNull::from(Box::leak(node));

        match self.tail {
            None => self.head = Some(node),
            // SAFETY: tail came from Box::leak and is only freed by pop or drop,
            // which clear it first. &mut self rules out any other live reference.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
        }

        self.tail = Some(node);
        self.size += 1;
        trace!(size = self.size, "push");

        true
    }

    pub fn peek(&self) -> Option<&T> {
        // SAFETY: head is a live leaked node for as long as &self is borrowed.
        self.head.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /*
     * Detach the head node and hand back its value.
     * Popping the last node also clears the tail.
     */
    pub fn pop(&mut self) -> Option<T> {
        let node = self.head?;
        // SAFETY: head came from Box::leak and is unlinked right below, so
        // ownership is taken back exactly once.
        let node = unsafe { Box::from_raw(node.as_ptr()) };
        let Node { value, next } = *node;

        self.head = next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.size -= 1;
        trace!(size = self.size, "pop");

        Some(value)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/*
 * Free nodes one at a time, from head to tail.
 */
impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        while self.pop().is_some() {}
    }
}

impl<T> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList").field("len", &self.size).finish()
    }
}
