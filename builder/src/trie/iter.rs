use super::TrieNode;

/// итератор по узлам одного уровня бора суффиксов
pub struct TrieIter<'a>
{
    source: &'a [u32],
    pos: u32,
    is_first: bool,
}

impl<'a> Iterator for TrieIter<'a>
{
    type Item = TrieNode;

    /// следующий элемент на уровне
    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item>
    {
        if self.is_first {
            self.is_first = false;

            return self.current_node();
        }

        // текущий элемент - последний?
        if self.current_node()?.is_last() {
            return None;
        }

        // промотаем до следующего элемента
        self.skip_to_next()?;

        self.current_node()
    }
}

impl<'a> TrieIter<'a>
{
    /// итератор по узлам уровня, начинающегося с offset
    #[inline(always)]
    pub fn new(source: &'a [u32], offset: u32) -> Self
    {
        Self {
            source,
            pos: offset,
            is_first: true,
        }
    }

    /// промотка до следующего элемента того же уровня, пропуская потомков текущего
    #[inline(always)]
    fn skip_to_next(&mut self) -> Option<()>
    {
        let mut node = self.current_node()?;
        let mut level = 0;

        loop {
            // новый элемент располагается на следующем уровне
            if node.has_children() {
                level += 1;
            }

            self.pos += 1;
            node = self.current_node()?;

            // уровень = 0, т.е. полученный элемент - искомый
            if level == 0 {
                return Some(());
            }

            // прочитанный элемент - последний на своем уровне
            if node.is_last() {
                level -= 1;
            }
        }
    }

    /// текущий узел
    #[inline(always)]
    fn current_node(&self) -> Option<TrieNode>
    {
        TrieNode::from_slice(self.source, self.pos)
    }
}
