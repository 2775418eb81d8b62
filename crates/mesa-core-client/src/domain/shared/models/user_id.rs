// mesa-core-client/mesa-core-client
//
// Copyright: 2025, Mesa Maintainers <dev@mesa-desk.org>
// License: Mozilla Public License v2.0 (MPL v2.0)

use mesa_utils::id_string;

id_string!(
    /// Identifies a user account on the help-desk backend.
    UserId
);
