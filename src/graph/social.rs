//! Random social network with friendship-path queries.

use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};
use std::fmt;

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::SocialError;

/// Sequential user id, starting at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u32);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user {}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
}

/// Users and their (always mutual) friendships.
#[derive(Clone, Debug, Default)]
pub struct SocialGraph {
    last_id: u32,
    users: BTreeMap<UserId, User>,
    friendships: BTreeMap<UserId, BTreeSet<UserId>>,
}

impl SocialGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user with the next sequential id.
    pub fn add_user(&mut self, name: impl Into<String>) -> UserId {
        self.last_id += 1;
        let id = UserId(self.last_id);
        self.users.insert(id, User { name: name.into() });
        self.friendships.insert(id, BTreeSet::new());
        id
    }

    /// Make two users friends with each other.
    pub fn add_friendship(&mut self, user: UserId, friend: UserId) -> Result<(), SocialError> {
        if user == friend {
            return Err(SocialError::SelfFriendship(user));
        }
        for id in [user, friend] {
            if !self.users.contains_key(&id) {
                return Err(SocialError::UnknownUser(id));
            }
        }
        if self.are_friends(user, friend) {
            return Err(SocialError::AlreadyFriends(user, friend));
        }
        self.friendships.entry(user).or_default().insert(friend);
        self.friendships.entry(friend).or_default().insert(user);
        Ok(())
    }

    pub fn are_friends(&self, a: UserId, b: UserId) -> bool {
        self.friendships.get(&a).is_some_and(|f| f.contains(&b))
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Total number of friendships (each pair counted once).
    pub fn friendship_count(&self) -> usize {
        self.friendships.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Friends of a user, ascending.
    pub fn friends(&self, id: UserId) -> Result<&BTreeSet<UserId>, SocialError> {
        self.friendships.get(&id).ok_or(SocialError::UnknownUser(id))
    }

    /// Replace the graph with `num_users` users and
    /// `num_users * avg_friendships / 2` random friendships.
    ///
    /// Shuffles every possible pair and takes a prefix, so no attempt is
    /// ever wasted.
    pub fn populate<R: Rng + ?Sized>(
        &mut self,
        num_users: u32,
        avg_friendships: u32,
        rng: &mut R,
    ) -> Result<(), SocialError> {
        let target = self.reset(num_users, avg_friendships)? / 2;

        let mut pairs: Vec<(UserId, UserId)> = (1..=num_users)
            .flat_map(|a| (a + 1..=num_users).map(move |b| (UserId(a), UserId(b))))
            .collect();
        pairs.shuffle(rng);

        for (a, b) in pairs.into_iter().take(target) {
            self.add_friendship(a, b)?;
        }
        debug!("Populated {} users with {} friendships", num_users, target);
        Ok(())
    }

    /// Like [`populate`](Self::populate), but picks random pairs until the
    /// target is met. An odd `num_users * avg_friendships` rounds the target
    /// up. Returns how many picks were rejected.
    pub fn populate_linear<R: Rng + ?Sized>(
        &mut self,
        num_users: u32,
        avg_friendships: u32,
        rng: &mut R,
    ) -> Result<usize, SocialError> {
        let target = self.reset(num_users, avg_friendships)?.div_ceil(2);

        let mut created = 0;
        let mut collisions = 0;
        while created < target {
            let a = UserId(rng.gen_range(1..=num_users));
            let b = UserId(rng.gen_range(1..=num_users));
            match self.add_friendship(a, b) {
                Ok(()) => created += 1,
                Err(_) => collisions += 1,
            }
        }
        debug!(
            "Populated {} users with {} friendships, {} collisions",
            num_users, target, collisions
        );
        Ok(collisions)
    }

    /// Clear the graph, add `num_users` users and return the number of
    /// friendship ends to hand out (twice the friendship count).
    fn reset(&mut self, num_users: u32, avg_friendships: u32) -> Result<usize, SocialError> {
        if avg_friendships >= num_users {
            return Err(SocialError::TooManyFriendships {
                average: avg_friendships,
                users: num_users,
            });
        }
        *self = Self::new();
        for i in 1..=num_users {
            self.add_user(format!("User {}", i));
        }
        Ok(num_users as usize * avg_friendships as usize)
    }

    /// Shortest friendship path from `user` to everyone in their extended
    /// network, the user included (as a one-element path).
    pub fn all_social_paths(
        &self,
        user: UserId,
    ) -> Result<HashMap<UserId, Vec<UserId>>, SocialError> {
        self.friends(user)?;
        let mut paths = HashMap::from([(user, vec![user])]);
        let mut queue = VecDeque::from([user]);

        while let Some(current) = queue.pop_front() {
            let Some(path) = paths.get(&current).cloned() else {
                continue;
            };
            for &friend in self.friends(current)? {
                if !paths.contains_key(&friend) {
                    let mut extended = path.clone();
                    extended.push(friend);
                    paths.insert(friend, extended);
                    queue.push_back(friend);
                }
            }
        }
        Ok(paths)
    }

    /// Mean degrees of separation between `user` and the rest of their
    /// extended network. Zero if the network is just the user.
    pub fn average_separation(&self, user: UserId) -> Result<f64, SocialError> {
        let paths = self.all_social_paths(user)?;
        let others = paths.len() - 1;
        if others == 0 {
            return Ok(0.0);
        }
        let hops: usize = paths.values().map(|p| p.len() - 1).sum();
        Ok(hops as f64 / others as f64)
    }

    /// Share of all other users that are in `user`'s extended network.
    pub fn network_coverage(&self, user: UserId) -> Result<f64, SocialError> {
        let reached = self.all_social_paths(user)?.len() - 1;
        let others = self.users.len() - 1;
        if others == 0 {
            return Ok(0.0);
        }
        Ok(reached as f64 / others as f64)
    }
}
