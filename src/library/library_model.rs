//! In-memory snippet library
//!
//! Groups own their snippets. IDs are assigned when items are added and stay
//! stable across reorders, so views can refer to rows by [`RowRef`] instead of
//! by position.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SnippetId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub id: SnippetId,
    pub name: String,
    pub body: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub collapsed: bool,
    pub snippets: Vec<Snippet>,
}

/// One rendered line of the list: a group header or a snippet under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowRef {
    Group(GroupId),
    Snippet(SnippetId),
}

#[derive(Debug, Clone, Default)]
pub struct Library {
    groups: Vec<Group>,
    next_id: u64,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_group(&mut self, name: impl Into<String>, collapsed: bool) -> GroupId {
        let id = GroupId(self.allocate_id());
        self.groups.push(Group {
            id,
            name: name.into(),
            collapsed,
            snippets: Vec::new(),
        });
        id
    }

    pub fn add_snippet(
        &mut self,
        group: GroupId,
        name: impl Into<String>,
        body: impl Into<String>,
        description: Option<String>,
    ) -> Option<SnippetId> {
        let group_index = self.group_index(group)?;
        let id = SnippetId(self.allocate_id());
        self.groups[group_index].snippets.push(Snippet {
            id,
            name: name.into(),
            body: body.into(),
            description,
        });
        Some(id)
    }

    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn snippet_count(&self) -> usize {
        self.groups.iter().map(|g| g.snippets.len()).sum()
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn snippet(&self, id: SnippetId) -> Option<&Snippet> {
        let (group_index, snippet_index) = self.locate_snippet(id)?;
        self.groups[group_index].snippets.get(snippet_index)
    }

    pub fn group_of(&self, id: SnippetId) -> Option<GroupId> {
        let (group_index, _) = self.locate_snippet(id)?;
        Some(self.groups[group_index].id)
    }

    fn group_index(&self, id: GroupId) -> Option<usize> {
        self.groups.iter().position(|g| g.id == id)
    }

    fn locate_snippet(&self, id: SnippetId) -> Option<(usize, usize)> {
        self.groups.iter().enumerate().find_map(|(gi, group)| {
            group
                .snippets
                .iter()
                .position(|s| s.id == id)
                .map(|si| (gi, si))
        })
    }

    /// Flatten into display rows. Collapsed groups hide their snippets.
    pub fn rows(&self) -> Vec<RowRef> {
        let mut rows = Vec::with_capacity(self.groups.len() + self.snippet_count());
        for group in &self.groups {
            rows.push(RowRef::Group(group.id));
            if !group.collapsed {
                rows.extend(group.snippets.iter().map(|s| RowRef::Snippet(s.id)));
            }
        }
        rows
    }

    pub fn toggle_group(&mut self, id: GroupId) -> bool {
        match self.groups.iter_mut().find(|g| g.id == id) {
            Some(group) => {
                group.collapsed = !group.collapsed;
                true
            }
            None => false,
        }
    }

    pub fn rename_group(&mut self, id: GroupId, name: &str) -> bool {
        match self.groups.iter_mut().find(|g| g.id == id) {
            Some(group) => {
                group.name = name.to_string();
                true
            }
            None => false,
        }
    }

    pub fn rename_snippet(&mut self, id: SnippetId, name: &str) -> bool {
        let Some((gi, si)) = self.locate_snippet(id) else {
            return false;
        };
        self.groups[gi].snippets[si].name = name.to_string();
        true
    }

    pub fn remove_group(&mut self, id: GroupId) -> Option<Group> {
        let index = self.group_index(id)?;
        Some(self.groups.remove(index))
    }

    pub fn remove_snippet(&mut self, id: SnippetId) -> Option<Snippet> {
        let (gi, si) = self.locate_snippet(id)?;
        Some(self.groups[gi].snippets.remove(si))
    }

    /// Move `from` to where `to` currently is.
    ///
    /// Groups move among groups; a snippet row as target stands for its group.
    /// Snippets dropped on a snippet take that snippet's position. Snippets
    /// dropped on another group's header go to the start of that group, and
    /// on their own group's header to the end of the previous group.
    pub fn move_row(&mut self, from: RowRef, to: RowRef) -> bool {
        if from == to {
            return false;
        }
        match from {
            RowRef::Group(id) => self.move_group(id, to),
            RowRef::Snippet(id) => self.move_snippet(id, to),
        }
    }

    fn move_group(&mut self, id: GroupId, to: RowRef) -> bool {
        let Some(from_index) = self.group_index(id) else {
            return false;
        };
        let target_index = match to {
            RowRef::Group(target) => self.group_index(target),
            RowRef::Snippet(target) => self.locate_snippet(target).map(|(gi, _)| gi),
        };
        let Some(target_index) = target_index else {
            return false;
        };
        if from_index == target_index {
            return false;
        }

        let group = self.groups.remove(from_index);
        self.groups.insert(target_index, group);
        true
    }

    fn move_snippet(&mut self, id: SnippetId, to: RowRef) -> bool {
        let Some((from_group, from_index)) = self.locate_snippet(id) else {
            return false;
        };

        let (target_group, target_index) = match to {
            RowRef::Snippet(target) => match self.locate_snippet(target) {
                Some(location) => location,
                None => return false,
            },
            RowRef::Group(target) => {
                let Some(target_group) = self.group_index(target) else {
                    return false;
                };
                if target_group == from_group {
                    let Some(previous) = from_group.checked_sub(1) else {
                        return false;
                    };
                    (previous, self.groups[previous].snippets.len())
                } else {
                    (target_group, 0)
                }
            }
        };

        let snippet = self.groups[from_group].snippets.remove(from_index);
        let snippets = &mut self.groups[target_group].snippets;
        let insert_at = target_index.min(snippets.len());
        snippets.insert(insert_at, snippet);
        true
    }
}

#[cfg(test)]
#[path = "library_model_tests.rs"]
mod library_model_tests;
