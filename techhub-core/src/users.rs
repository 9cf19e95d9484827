//! Ordered user collection.

use serde::Serialize;

use crate::user::User;

/// Users in registration order, unique by exact name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserList {
    users: Vec<User>,
}

impl UserList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `user` unless one with the same name exists (first one wins).
    /// Returns whether it was inserted.
    pub fn add(&mut self, user: User) -> bool {
        if self.contains(user.name()) {
            return false;
        }
        self.users.push(user);
        true
    }

    /// Find the user called `name`, inserting `make()` if there is none.
    /// The flag reports whether an insert happened.
    pub fn find_or_insert_with(
        &mut self,
        name: &str,
        make: impl FnOnce() -> User,
    ) -> (&mut User, bool) {
        match self.users.iter().position(|u| u.is_named(name)) {
            Some(index) => (&mut self.users[index], false),
            None => {
                self.users.push(make());
                let last = self.users.len() - 1;
                (&mut self.users[last], true)
            }
        }
    }

    pub fn find_by_name(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|u| u.is_named(name))
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.is_named(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, User> {
        self.users.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, User> {
        self.users.iter_mut()
    }
}

impl<'a> IntoIterator for &'a UserList {
    type Item = &'a User;
    type IntoIter = std::slice::Iter<'a, User>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
